use super::common::{push_opt, Params, Query};

/// Filters for `/assets/`. Every field is optional; unset fields fall back to
/// the endpoint defaults.
#[derive(Clone, Debug, Default)]
pub struct AssetsQuery {
    pub auction_started: Option<String>,
    pub auction_state: Option<String>,
    pub auction_type: Option<String>,
    pub bidder: Option<String>,
    pub chain: Option<String>,
    pub chain_name: Option<String>,
    pub collection_slug: Option<String>,
    pub contract: Option<String>,
    pub contract_id: Option<String>,
    pub creator: Option<String>,
    pub fiat_currency: Option<String>,
    pub filter1name: Option<String>,
    pub filter1value: Option<String>,
    pub filter2name: Option<String>,
    pub filter2value: Option<String>,
    pub filter3name: Option<String>,
    pub filter3value: Option<String>,
    pub filter4name: Option<String>,
    pub filter4value: Option<String>,
    pub filter5name: Option<String>,
    pub filter5value: Option<String>,
    pub grouping: Option<u32>,
    pub issuer: Option<String>,
    pub light_mode: Option<u32>,
    pub limit: Option<u32>,
    pub maker: Option<String>,
    pub name: Option<String>,
    pub nsfw_mode: Option<String>,
    pub offset: Option<u64>,
    pub only_verified: Option<u32>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub owner: Option<String>,
    pub price_similar: Option<u64>,
    pub price_similar_delta: Option<u64>,
    pub quote_symbol: Option<String>,
    pub series_id: Option<String>,
    pub status: Option<String>,
    pub symbol: Option<String>,
    pub token_id: Option<String>,
    pub with_total: Option<u32>,
}

impl Query for AssetsQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "auction_started", &self.auction_started);
        push_opt(&mut p, "auction_state", &self.auction_state);
        push_opt(&mut p, "auction_type", &self.auction_type);
        push_opt(&mut p, "bidder", &self.bidder);
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "chain_name", &self.chain_name);
        push_opt(&mut p, "collection_slug", &self.collection_slug);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "contract_id", &self.contract_id);
        push_opt(&mut p, "creator", &self.creator);
        push_opt(&mut p, "fiat_currency", &self.fiat_currency);
        push_opt(&mut p, "filter1name", &self.filter1name);
        push_opt(&mut p, "filter1value", &self.filter1value);
        push_opt(&mut p, "filter2name", &self.filter2name);
        push_opt(&mut p, "filter2value", &self.filter2value);
        push_opt(&mut p, "filter3name", &self.filter3name);
        push_opt(&mut p, "filter3value", &self.filter3value);
        push_opt(&mut p, "filter4name", &self.filter4name);
        push_opt(&mut p, "filter4value", &self.filter4value);
        push_opt(&mut p, "filter5name", &self.filter5name);
        push_opt(&mut p, "filter5value", &self.filter5value);
        push_opt(&mut p, "grouping", &self.grouping);
        push_opt(&mut p, "issuer", &self.issuer);
        push_opt(&mut p, "light_mode", &self.light_mode);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "maker", &self.maker);
        push_opt(&mut p, "name", &self.name);
        push_opt(&mut p, "nsfw_mode", &self.nsfw_mode);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "only_verified", &self.only_verified);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(&mut p, "owner", &self.owner);
        push_opt(&mut p, "price_similar", &self.price_similar);
        push_opt(&mut p, "price_similar_delta", &self.price_similar_delta);
        push_opt(&mut p, "quote_symbol", &self.quote_symbol);
        push_opt(&mut p, "series_id", &self.series_id);
        push_opt(&mut p, "status", &self.status);
        push_opt(&mut p, "symbol", &self.symbol);
        push_opt(&mut p, "token_id", &self.token_id);
        push_opt(&mut p, "with_total", &self.with_total);
        p
    }
}

impl AssetsQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_collection_slug(mut self, collection_slug: &str) -> Self {
        self.collection_slug = Some(collection_slug.to_string());
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
    pub fn with_maker(mut self, maker: &str) -> Self {
        self.maker = Some(maker.to_string());
        self
    }
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
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
    pub fn with_fiat_currency(mut self, fiat_currency: &str) -> Self {
        self.fiat_currency = Some(fiat_currency.to_string());
        self
    }
    pub fn with_auction_state(mut self, auction_state: &str) -> Self {
        self.auction_state = Some(auction_state.to_string());
        self
    }
    pub fn with_only_verified(mut self, only_verified: u32) -> Self {
        self.only_verified = Some(only_verified);
        self
    }
    pub fn with_total(mut self, with_total: u32) -> Self {
        self.with_total = Some(with_total);
        self
    }
}
