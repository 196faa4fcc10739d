mod client;
mod config;
mod constants;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::{Client, Logger, RequestOptions};
pub use self::config::{Config, Network};
pub use self::constants::{
    API_BASE_MAINNET, API_BASE_RINKEBY, API_PATH, ORDERBOOK_VERSION, SITE_HOST_MAINNET,
    SITE_HOST_RINKEBY,
};
pub use self::errors::Error;
pub use self::query::{
    merge, AssetsQuery, CollectionsQuery, EventsQuery, OpenMintingsQuery, OrderQuery, Params,
    Query, SeriesQuery, StatisticsQuery, TokenQuery, UsersQuery,
};
