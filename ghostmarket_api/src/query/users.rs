use super::common::{push_opt, Params, Query};

/// Filters for `/users/`.
#[derive(Clone, Debug, Default)]
pub struct UsersQuery {
    pub address: Option<String>,
    pub chain: Option<String>,
    pub issuer: Option<String>,
    pub limit: Option<u32>,
    pub offchain_name: Option<String>,
    pub offchain_name_partial: Option<String>,
    pub offset: Option<u64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub verified: Option<bool>,
    pub with_sales_statistics: Option<u32>,
    pub with_total: Option<u32>,
}

impl Query for UsersQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "address", &self.address);
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "issuer", &self.issuer);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "offchain_name", &self.offchain_name);
        push_opt(&mut p, "offchain_name_partial", &self.offchain_name_partial);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(&mut p, "verified", &self.verified);
        push_opt(&mut p, "with_sales_statistics", &self.with_sales_statistics);
        push_opt(&mut p, "with_total", &self.with_total);
        p
    }
}

impl UsersQuery {
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_offchain_name(mut self, offchain_name: &str) -> Self {
        self.offchain_name = Some(offchain_name.to_string());
        self
    }
    pub fn with_offchain_name_partial(mut self, offchain_name_partial: &str) -> Self {
        self.offchain_name_partial = Some(offchain_name_partial.to_string());
        self
    }
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }
    pub fn with_order_direction(mut self, order_direction: &str) -> Self {
        self.order_direction = Some(order_direction.to_string());
        self
    }
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }
    pub fn with_sales_statistics(mut self, with_sales_statistics: u32) -> Self {
        self.with_sales_statistics = Some(with_sales_statistics);
        self
    }
    pub fn with_total(mut self, with_total: u32) -> Self {
        self.with_total = Some(with_total);
        self
    }
}
