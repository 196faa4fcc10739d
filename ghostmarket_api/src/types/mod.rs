mod order;
pub use self::order::{Order, OrderbookResponse};
