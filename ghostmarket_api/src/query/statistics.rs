use super::common::{push_opt, Params, Query};

/// Filters for `/statistics/`. The `with_*_stats` flags toggle which stat
/// groups the API includes; all twelve default to enabled on the endpoint.
#[derive(Clone, Debug, Default)]
pub struct StatisticsQuery {
    pub chain: Option<String>,
    pub collection_slug: Option<String>,
    pub currency: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub with_collections_daily_stats: Option<u32>,
    pub with_collections_weekly_stats: Option<u32>,
    pub with_collections_monthly_stats: Option<u32>,
    pub with_collections_total_stats: Option<u32>,
    pub with_chains_daily_stats: Option<u32>,
    pub with_chains_weekly_stats: Option<u32>,
    pub with_chains_monthly_stats: Option<u32>,
    pub with_chains_total_stats: Option<u32>,
    pub with_marketplace_daily_stats: Option<u32>,
    pub with_marketplace_weekly_stats: Option<u32>,
    pub with_marketplace_monthly_stats: Option<u32>,
    pub with_marketplace_total_stats: Option<u32>,
}

impl Query for StatisticsQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "collection_slug", &self.collection_slug);
        push_opt(&mut p, "currency", &self.currency);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "offset", &self.offset);
        push_opt(&mut p, "order_by", &self.order_by);
        push_opt(&mut p, "order_direction", &self.order_direction);
        push_opt(
            &mut p,
            "with_collections_daily_stats",
            &self.with_collections_daily_stats,
        );
        push_opt(
            &mut p,
            "with_collections_weekly_stats",
            &self.with_collections_weekly_stats,
        );
        push_opt(
            &mut p,
            "with_collections_monthly_stats",
            &self.with_collections_monthly_stats,
        );
        push_opt(
            &mut p,
            "with_collections_total_stats",
            &self.with_collections_total_stats,
        );
        push_opt(&mut p, "with_chains_daily_stats", &self.with_chains_daily_stats);
        push_opt(
            &mut p,
            "with_chains_weekly_stats",
            &self.with_chains_weekly_stats,
        );
        push_opt(
            &mut p,
            "with_chains_monthly_stats",
            &self.with_chains_monthly_stats,
        );
        push_opt(&mut p, "with_chains_total_stats", &self.with_chains_total_stats);
        push_opt(
            &mut p,
            "with_marketplace_daily_stats",
            &self.with_marketplace_daily_stats,
        );
        push_opt(
            &mut p,
            "with_marketplace_weekly_stats",
            &self.with_marketplace_weekly_stats,
        );
        push_opt(
            &mut p,
            "with_marketplace_monthly_stats",
            &self.with_marketplace_monthly_stats,
        );
        push_opt(
            &mut p,
            "with_marketplace_total_stats",
            &self.with_marketplace_total_stats,
        );
        p
    }
}

impl StatisticsQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_collection_slug(mut self, collection_slug: &str) -> Self {
        self.collection_slug = Some(collection_slug.to_string());
        self
    }
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
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
}
