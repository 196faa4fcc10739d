use super::common::{push_opt, Params, Query};

/// Filters for the orderbook endpoints (`/openorders/`, `/getopenorders/`).
///
/// `offset` and `limit` override the pagination computed from the page number
/// and the client's page size when set.
#[derive(Clone, Debug, Default)]
pub struct OrderQuery {
    pub chain: Option<String>,
    pub contract: Option<String>,
    pub token_id: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u32>,
    pub with_deleted: Option<bool>,
}

impl Query for OrderQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "token_id", &self.token_id);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "with_deleted", &self.with_deleted);
        p
    }
}

impl OrderQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }
    pub fn with_token_id(mut self, token_id: &str) -> Self {
        self.token_id = Some(token_id.to_string());
        self
    }
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_deleted(mut self, with_deleted: bool) -> Self {
        self.with_deleted = Some(with_deleted);
        self
    }
}
