use serde::{Deserialize, Serialize};

/// An orderbook entry. The order endpoints return untyped JSON; this type is
/// for consumers that want to deserialize the `orders` array.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub chain: String,
    pub token_contract: String,
    pub token_id: String,
    pub token_amount: String,
    pub quote_contract: String,
    pub quote_price: String,
    pub maker_address: String,
    pub start_date: String,
    pub end_date: String,
    pub signature: String,
    pub order_key_hash: String,
    pub salt: String,
    pub origin_fees: String,
    pub origin_address: String,
}

/// Shape of the `/openorders/` response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderbookResponse {
    pub orders: Vec<Order>,
    pub count: i64,
}
