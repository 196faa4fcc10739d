//! HTTP client for the GhostMarket REST API.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    config::Config,
    constants::API_PATH,
    query::{
        merge, pairs, AssetsQuery, CollectionsQuery, EventsQuery, OpenMintingsQuery, OrderQuery,
        Params, Query, SeriesQuery, StatisticsQuery, TokenQuery, UsersQuery,
    },
    user_agent::get_user_agent,
    Error,
};

/// Logging callback invoked once before each outbound request and once after
/// each response. Defaults to a no-op.
pub type Logger = Box<dyn Fn(&str) + Send + Sync>;

/// Options for a single request. Endpoint methods only exercise GET, but the
/// fetch step accepts a method, extra headers, and a body.
#[derive(Clone, Debug, Serialize)]
pub struct RequestOptions {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

/// HTTP client for the GhostMarket REST API.
///
/// Construction resolves the API base URL and site host from the configured
/// network (an explicit `api_base_url` override always wins) and never fails.
/// Each request builds a fresh `reqwest::Client` with a randomized browser
/// user agent. No retries, caching, or client-side timeouts.
pub struct Client {
    api_base_url: String,
    host_url: String,
    api_key: Option<String>,
    /// Page size used by the paginated order endpoints. Defaults to 20.
    pub page_size: u32,
    /// Logging callback. Replace to capture request/response lines.
    pub logger: Logger,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Client {
    /// Creates a client from the given configuration with a no-op logger.
    pub fn new(config: Config) -> Self {
        Self::with_logger(config, Box::new(|_| {}))
    }

    /// Creates a client with a logging callback for request/response lines.
    pub fn with_logger(config: Config, logger: Logger) -> Self {
        let api_base_url = config
            .api_base_url
            .unwrap_or_else(|| config.network.api_base_url().to_string());
        Self {
            api_base_url,
            host_url: config.network.host_url().to_string(),
            api_key: config.api_key,
            page_size: 20,
            logger,
        }
    }

    /// Creates a client pointing at a custom base URL on the default network.
    /// Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Config {
            api_base_url: Some(base_url.to_string()),
            ..Config::default()
        })
    }

    /// Resolved base URL for API requests.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Marketplace site host for the configured network.
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Fetches NFT assets listed on the marketplace.
    pub async fn get_assets(&self, query: &AssetsQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "id"),
            ("order_direction", "asc"),
            ("with_total", "0"),
            ("fiat_currency", "USD"),
            ("auction_state", "all"),
            ("auction_started", "all"),
            ("light_mode", "0"),
        ]);
        self.get(&format!("{API_PATH}/assets/"), &merge(defaults, query.params()))
            .await
    }

    /// Fetches NFT collections listed on the marketplace.
    pub async fn get_collections(&self, query: &CollectionsQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "id"),
            ("order_direction", "asc"),
            ("with_total", "1"),
        ]);
        self.get(
            &format!("{API_PATH}/collections/"),
            &merge(defaults, query.params()),
        )
        .await
    }

    /// Fetches marketplace events (listings, sales, transfers, ...).
    pub async fn get_events(&self, query: &EventsQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "id"),
            ("order_direction", "asc"),
            ("show_events", "not_hidden"),
            ("fiat_currency", "USD"),
            ("grouping", "0"),
            ("with_metadata", "0"),
            ("with_series", "0"),
            ("with_total", "0"),
        ]);
        self.get(&format!("{API_PATH}/events/"), &merge(defaults, query.params()))
            .await
    }

    /// Fetches the metadata of a single token.
    pub async fn get_metadata(&self, query: &TokenQuery) -> Result<Value, Error> {
        self.get(&format!("{API_PATH}/metadata/"), &query.params())
            .await
    }

    /// Fetches open mintings on the marketplace.
    pub async fn get_open_mintings(&self, query: &OpenMintingsQuery) -> Result<Value, Error> {
        self.get(&format!("{API_PATH}/getopenmintings/"), &query.params())
            .await
    }

    /// Fetches open orders without pagination defaults.
    pub async fn get_open_orders(&self, query: &OrderQuery) -> Result<Value, Error> {
        self.get(&format!("{API_PATH}/getopenorders/"), &query.params())
            .await
    }

    /// Fetches a page of the orderbook. `page` is 1-indexed; `limit` and
    /// `offset` derive from [`Client::page_size`] unless the query overrides
    /// them.
    pub async fn get_order(&self, query: &OrderQuery, page: u32) -> Result<Value, Error> {
        self.get_order_page(query, page).await
    }

    /// Fetches a page of orders from the orderbook. Identical to
    /// [`Client::get_order`]; both map to `/openorders/`.
    pub async fn get_orders(&self, query: &OrderQuery, page: u32) -> Result<Value, Error> {
        self.get_order_page(query, page).await
    }

    async fn get_order_page(&self, query: &OrderQuery, page: u32) -> Result<Value, Error> {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(self.page_size);
        let defaults = pairs(&[
            ("limit", &self.page_size.to_string()),
            ("offset", &offset.to_string()),
        ]);
        self.get(
            &format!("{API_PATH}/openorders/"),
            &merge(defaults, query.params()),
        )
        .await
    }

    /// Asks the marketplace to refresh a token's metadata.
    pub async fn get_refresh_metadata(&self, query: &TokenQuery) -> Result<Value, Error> {
        self.get(&format!("{API_PATH}/refreshmetadata/"), &query.params())
            .await
    }

    /// Fetches NFT series.
    pub async fn get_series(&self, query: &SeriesQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "id"),
            ("order_direction", "asc"),
        ]);
        self.get(&format!("{API_PATH}/series/"), &merge(defaults, query.params()))
            .await
    }

    /// Fetches marketplace statistics.
    pub async fn get_statistics(&self, query: &StatisticsQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "id"),
            ("order_direction", "asc"),
            ("currency", "USD"),
            ("with_collections_daily_stats", "1"),
            ("with_collections_weekly_stats", "1"),
            ("with_collections_monthly_stats", "1"),
            ("with_collections_total_stats", "1"),
            ("with_chains_daily_stats", "1"),
            ("with_chains_weekly_stats", "1"),
            ("with_chains_monthly_stats", "1"),
            ("with_chains_total_stats", "1"),
            ("with_marketplace_daily_stats", "1"),
            ("with_marketplace_weekly_stats", "1"),
            ("with_marketplace_monthly_stats", "1"),
            ("with_marketplace_total_stats", "1"),
        ]);
        self.get(
            &format!("{API_PATH}/statistics/"),
            &merge(defaults, query.params()),
        )
        .await
    }

    /// Fetches the token URI of a single token.
    pub async fn get_token_uri(&self, query: &TokenQuery) -> Result<Value, Error> {
        self.get(&format!("{API_PATH}/tokenuri/"), &query.params())
            .await
    }

    /// Checks whether a username is already taken on the marketplace.
    pub async fn get_user_exists(&self, username: &str) -> Result<Value, Error> {
        self.get(
            &format!("{API_PATH}/userexists/"),
            &pairs(&[("username", username)]),
        )
        .await
    }

    /// Fetches marketplace users.
    pub async fn get_users(&self, query: &UsersQuery) -> Result<Value, Error> {
        let defaults = pairs(&[
            ("limit", "50"),
            ("offset", "0"),
            ("order_by", "join_order"),
            ("order_direction", "asc"),
            ("with_sales_statistics", "0"),
            ("with_total", "0"),
        ]);
        self.get(&format!("{API_PATH}/users/"), &merge(defaults, query.params()))
            .await
    }

    /// Serializes the parameters, issues exactly one GET against
    /// `{api_path}?{query}`, and parses the success body as JSON without any
    /// schema validation.
    async fn get(&self, api_path: &str, params: &Params) -> Result<Value, Error> {
        let qs = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        let resp = self
            .fetch(&format!("{api_path}?{qs}"), RequestOptions::default())
            .await?;
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        let parsed = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("failed to parse response body: {}", e);
            Error::Decode(e)
        })?;
        Ok(parsed)
    }

    /// Sends one request to the configured base URL, injecting the
    /// `X-API-KEY` header when an API key is set. Caller headers are applied
    /// on top and can add to (or re-value) the key header, but its presence is
    /// governed solely by the configuration.
    async fn fetch(
        &self,
        api_path: &str,
        opts: RequestOptions,
    ) -> Result<reqwest::Response, Error> {
        let url = Url::parse(&format!("{}{}", self.api_base_url, api_path)).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::Url(e)
        })?;

        let RequestOptions {
            method,
            headers: caller_headers,
            body,
        } = opts;
        let mut headers = BTreeMap::new();
        if let Some(api_key) = &self.api_key {
            headers.insert("X-API-KEY".to_string(), api_key.clone());
        }
        headers.extend(caller_headers);
        let final_opts = RequestOptions {
            method,
            headers,
            body,
        };

        let dump = serde_json::to_string(&final_opts).unwrap_or_default();
        (self.logger)(&format!(
            "Sending request: {} {}...",
            url,
            truncate(&dump, 100)
        ));

        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let method = reqwest::Method::from_bytes(final_opts.method.as_bytes())
            .unwrap_or(reqwest::Method::GET);
        let mut req = client.request(method, url);
        for (name, value) in &final_opts.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = final_opts.body {
            req = req.body(body);
        }
        let resp = req.send().await.map_err(|e| {
            tracing::error!("request failed: {}", e);
            Error::Transport(e)
        })?;

        self.handle_api_response(resp).await
    }

    /// Classifies the response: 2xx passes through for JSON parsing, anything
    /// else becomes a single [`Error::Api`] with a descriptive message. The
    /// error body is decoded best-effort; an unparseable body degrades to the
    /// raw text instead of failing classification.
    async fn handle_api_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            (self.logger)(&format!("Got success: {}", status.as_u16()));
            return Ok(resp);
        }

        let raw = resp.text().await.unwrap_or_default();
        let parsed: Option<Value> = serde_json::from_str(&raw).ok();
        let dump = match &parsed {
            Some(value) => value.to_string(),
            None => raw,
        };
        (self.logger)(&format!("Got error {}: {}", status.as_u16(), dump));
        tracing::error!("request failed with status {}: {}", status, dump);

        Err(Error::Api {
            status: status.as_u16(),
            message: classify_error(status.as_u16(), parsed.as_ref(), &dump),
        })
    }
}

/// Maps a non-2xx status and its decoded body to a human-readable message.
fn classify_error(status: u16, body: Option<&Value>, dump: &str) -> String {
    match status {
        400 => body
            .and_then(|v| v.get("errors"))
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .map(|e| match e.as_str() {
                        Some(s) => s.to_string(),
                        None => e.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| format!("Invalid request: {dump}")),
        401 | 403 => format!("Unauthorized. Full message was '{dump}'"),
        404 => format!("Not found. Full message was '{dump}'"),
        500 => format!(
            "Internal server error. GhostMarket has been alerted, but if the problem persists please contact us via Discord: https://discord.gg/ga8EJbv - full message was {dump}"
        ),
        503 => format!(
            "Service unavailable. Please try again in a few minutes. If the problem persists please contact us via Discord: https://discord.gg/ga8EJbv - full message was {dump}"
        ),
        _ => format!("Message: {dump}"),
    }
}

/// Truncates to at most `max` characters, on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
