use super::common::{push_opt, Params, Query};

/// Filters for `/series/`.
#[derive(Clone, Debug, Default)]
pub struct SeriesQuery {
    pub chain: Option<String>,
    pub contract: Option<String>,
    pub creator: Option<String>,
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub name: Option<String>,
    pub offset: Option<u64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub symbol: Option<String>,
}

impl Query for SeriesQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "creator", &self.creator);
        push_opt(&mut p, "id", &self.id);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "name", &self.name);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(&mut p, "symbol", &self.symbol);
        p
    }
}

impl SeriesQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }
    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
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
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }
}
