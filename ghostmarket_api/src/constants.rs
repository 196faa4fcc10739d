//! Network endpoints for the GhostMarket REST API.

/// Version of the orderbook API baked into [`API_PATH`].
pub const ORDERBOOK_VERSION: u32 = 1;

/// Path prefix for every API endpoint (`/api/v{ORDERBOOK_VERSION}`).
pub const API_PATH: &str = "/api/v1";

/// Base URL for the production API.
pub const API_BASE_MAINNET: &str = "https://api.ghostmarket.io";

/// Base URL for the Rinkeby test API. The test network has no public API
/// deployment; callers must supply `api_base_url` in [`crate::Config`].
pub const API_BASE_RINKEBY: &str = "";

/// Marketplace site host for the production network.
pub const SITE_HOST_MAINNET: &str = "https://ghostmarket.io";

/// Marketplace site host for the Rinkeby test network.
pub const SITE_HOST_RINKEBY: &str = "https://rinkeby.ghostmarket.io";
