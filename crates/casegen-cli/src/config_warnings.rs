use casegen_config::{API_KEY_ENV_VAR, CaseGenConfig};

/// Emit warnings for configuration that will fail late or was silently ignored.
pub fn warn_unconfigured(config: &CaseGenConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CaseGenConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.general.defaults_to_remote() && !config.openai.is_configured() {
        warnings.push(format!(
            "Default provider is '{}' but the remote provider is not configured. Set {API_KEY_ENV_VAR} (or CASEGEN_OPENAI__API_KEY) or pass --provider local.",
            config.general.default_provider
        ));
    }

    if !config.openai.is_configured() && has_single_underscore_key(&env_keys, "CASEGEN_OPENAI") {
        warnings.push(
            "OpenAI config appears default while CASEGEN_OPENAI_* env vars exist. Use double underscores (example: CASEGEN_OPENAI__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "CASEGEN_GENERAL") {
        warnings.push(
            "CASEGEN_GENERAL_* env vars are ignored. Use double underscores (example: CASEGEN_GENERAL__OUTPUT_DIR)."
                .to_string(),
        );
    }

    warnings
}

/// `CASEGEN_OPENAI_MODEL` instead of `CASEGEN_OPENAI__MODEL`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
