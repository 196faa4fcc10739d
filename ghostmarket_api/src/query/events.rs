use super::common::{push_opt, Params, Query};

/// Filters for `/events/`.
#[derive(Clone, Debug, Default)]
pub struct EventsQuery {
    pub address: Option<String>,
    pub chain: Option<String>,
    pub contract: Option<String>,
    pub event_kind: Option<String>,
    pub fiat_currency: Option<String>,
    pub grouping: Option<u32>,
    pub issuer: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub show_events: Option<String>,
    pub token_id: Option<String>,
    pub with_metadata: Option<u32>,
    pub with_series: Option<u32>,
    pub with_total: Option<u32>,
}

impl Query for EventsQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "address", &self.address);
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "event_kind", &self.event_kind);
        push_opt(&mut p, "fiat_currency", &self.fiat_currency);
        push_opt(&mut p, "grouping", &self.grouping);
        push_opt(&mut p, "issuer", &self.issuer);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(&mut p, "show_events", &self.show_events);
        push_opt(&mut p, "token_id", &self.token_id);
        push_opt(&mut p, "with_metadata", &self.with_metadata);
        push_opt(&mut p, "with_series", &self.with_series);
        push_opt(&mut p, "with_total", &self.with_total);
        p
    }
}

impl EventsQuery {
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }
    pub fn with_event_kind(mut self, event_kind: &str) -> Self {
        self.event_kind = Some(event_kind.to_string());
        self
    }
    pub fn with_token_id(mut self, token_id: &str) -> Self {
        self.token_id = Some(token_id.to_string());
        self
    }
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
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
    pub fn with_show_events(mut self, show_events: &str) -> Self {
        self.show_events = Some(show_events.to_string());
        self
    }
    pub fn with_metadata(mut self, with_metadata: u32) -> Self {
        self.with_metadata = Some(with_metadata);
        self
    }
    pub fn with_series(mut self, with_series: u32) -> Self {
        self.with_series = Some(with_series);
        self
    }
    pub fn with_total(mut self, with_total: u32) -> Self {
        self.with_total = Some(with_total);
        self
    }
}
