use super::common::{push_opt, Params, Query};

/// Filters for `/collections/`.
#[derive(Clone, Debug, Default)]
pub struct CollectionsQuery {
    pub chain: Option<String>,
    pub collection_slug: Option<String>,
    pub issuer: Option<String>,
    pub limit: Option<u32>,
    pub nft_name: Option<String>,
    pub offset: Option<u64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub owner: Option<String>,
    pub quote_symbol: Option<String>,
    pub series_id: Option<String>,
    pub with_total: Option<u32>,
}

impl Query for CollectionsQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "collection_slug", &self.collection_slug);
        push_opt(&mut p, "issuer", &self.issuer);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "nft_name", &self.nft_name);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(&mut p, "owner", &self.owner);
        push_opt(&mut p, "quote_symbol", &self.quote_symbol);
        push_opt(&mut p, "series_id", &self.series_id);
        push_opt(&mut p, "with_total", &self.with_total);
        p
    }
}

impl CollectionsQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_collection_slug(mut self, collection_slug: &str) -> Self {
        self.collection_slug = Some(collection_slug.to_string());
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
    pub fn with_nft_name(mut self, nft_name: &str) -> Self {
        self.nft_name = Some(nft_name.to_string());
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
    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }
    pub fn with_quote_symbol(mut self, quote_symbol: &str) -> Self {
        self.quote_symbol = Some(quote_symbol.to_string());
        self
    }
    pub fn with_series_id(mut self, series_id: &str) -> Self {
        self.series_id = Some(series_id.to_string());
        self
    }
    pub fn with_total(mut self, with_total: u32) -> Self {
        self.with_total = Some(with_total);
        self
    }
}
