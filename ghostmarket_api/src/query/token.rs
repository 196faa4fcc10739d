use super::common::{push_opt, Params, Query};

/// Identifies a single token for the metadata endpoints (`/metadata/`,
/// `/refreshmetadata/`, `/tokenuri/`).
#[derive(Clone, Debug, Default)]
pub struct TokenQuery {
    pub chain: Option<String>,
    pub contract: Option<String>,
    pub token_id: Option<String>,
}

impl Query for TokenQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "token_id", &self.token_id);
        p
    }
}

impl TokenQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }
    pub fn with_token_id(mut self, token_id: &str) -> Self {
        self.token_id = Some(token_id.to_string());
        self
    }
}
