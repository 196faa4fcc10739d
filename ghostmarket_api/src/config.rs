//! Client configuration and network selection.

use crate::constants::{
    API_BASE_MAINNET, API_BASE_RINKEBY, SITE_HOST_MAINNET, SITE_HOST_RINKEBY,
};

/// GhostMarket deployment to target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// Production network. This is the default.
    #[default]
    Main,
    /// Rinkeby test network.
    Rinkeby,
}

impl Network {
    /// Default API base URL for this network, used when [`Config::api_base_url`]
    /// is not set.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Network::Main => API_BASE_MAINNET,
            Network::Rinkeby => API_BASE_RINKEBY,
        }
    }

    /// Marketplace site host for this network.
    pub fn host_url(&self) -> &'static str {
        match self {
            Network::Main => SITE_HOST_MAINNET,
            Network::Rinkeby => SITE_HOST_RINKEBY,
        }
    }
}

/// Construction-time configuration for [`crate::Client`].
///
/// Every field is optional in the sense that `Config::default()` is a valid
/// configuration targeting the production network with no API key.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Network to target. Defaults to [`Network::Main`].
    pub network: Network,
    /// API key sent as `X-API-KEY` on every request when set.
    pub api_key: Option<String>,
    /// Overrides the network's default API base URL when set.
    pub api_base_url: Option<String>,
    /// Accepted for API parity; the request pipeline does not use it.
    pub use_read_only_provider: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_network_is_main() {
        assert_eq!(Network::default(), Network::Main);
        assert_eq!(Config::default().network, Network::Main);
    }

    #[test]
    fn network_url_pairings() {
        assert_eq!(Network::Main.api_base_url(), "https://api.ghostmarket.io");
        assert_eq!(Network::Main.host_url(), "https://ghostmarket.io");
        assert_eq!(Network::Rinkeby.api_base_url(), "");
        assert_eq!(
            Network::Rinkeby.host_url(),
            "https://rinkeby.ghostmarket.io"
        );
    }
}
