use anyhow::Context;
use casegen_config::CaseGenConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<CaseGenConfig> {
    CaseGenConfig::load_with_dotenv().context("failed to load casegen configuration")
}
