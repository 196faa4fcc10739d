use super::common::{push_opt, Params, Query};

/// Filters for `/getopenmintings/`.
#[derive(Clone, Debug, Default)]
pub struct OpenMintingsQuery {
    pub chain: Option<String>,
    pub contract: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl Query for OpenMintingsQuery {
    fn params(&self) -> Params {
        let mut p = Params::new();
        push_opt(&mut p, "chain", &self.chain);
        push_opt(&mut p, "contract", &self.contract);
        push_opt(&mut p, "limit", &self.limit);
        push_opt(&mut p, "offset", &self.offset);
        p
    }
}

impl OpenMintingsQuery {
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.chain = Some(chain.to_string());
        self
    }
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
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
}
