use anyhow::Context;
use survey_config::SurveyConfig;

use crate::cli::Cli;

/// Port variable honored for compatibility with older deployments, e.g. `APP_PORT=:8000`.
const LEGACY_PORT_ENV: &str = "APP_PORT";

/// Load layered config, then apply legacy env and CLI overrides (CLI wins).
pub fn load_config(cli: &Cli) -> anyhow::Result<SurveyConfig> {
    let mut config = SurveyConfig::load_with_dotenv().context("failed to load configuration")?;

    match legacy_port(std::env::vars()) {
        Some(Ok(port)) if std::env::var_os("SURVEY_SERVER__PORT").is_none() => {
            tracing::debug!(port, "using {LEGACY_PORT_ENV}");
            config.server.port = port;
        }
        Some(Err(raw)) => {
            tracing::warn!(value = %raw, "ignoring unparsable {LEGACY_PORT_ENV}");
        }
        _ => {}
    }

    for warning in collect_config_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }

    apply_overrides(&mut config, cli);
    config
        .validate()
        .context("invalid configuration after applying overrides")?;
    Ok(config)
}

fn apply_overrides(config: &mut SurveyConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.data_file {
        config.storage.data_file.clone_from(path);
    }
    if let Some(max) = cli.max_questions {
        config.survey.max_questions = max;
    }
}

/// `APP_PORT` accepts `8000` or `:8000`. `Err` carries the raw value when it does not parse.
fn legacy_port<I>(env: I) -> Option<Result<u16, String>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let (_, raw) = env.into_iter().find(|(key, _)| key == LEGACY_PORT_ENV)?;
    let trimmed = raw.trim().trim_start_matches(':');
    Some(trimmed.parse().map_err(|_| raw.clone()))
}

/// Warn about `SURVEY_*` keys using a single underscore where figment expects `__`.
fn collect_config_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    const SECTIONS: [&str; 3] = ["SERVER", "STORAGE", "SURVEY"];

    env.into_iter()
        .filter_map(|(key, _)| {
            let rest = key.strip_prefix("SURVEY_")?;
            let section = SECTIONS
                .into_iter()
                .find(|s| rest.starts_with(s) && rest[s.len()..].starts_with('_'))?;
            let field = &rest[section.len()..];
            if field.starts_with("__") {
                None
            } else {
                Some(format!(
                    "{key} is not a recognized config key and was ignored. Use double underscores (example: SURVEY_{section}_{field})."
                ))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn cli_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "surveyd",
            "--port",
            "9100",
            "--data-file",
            "x.json",
            "--max-questions",
            "9",
        ])
        .expect("cli should parse");
        let mut config = SurveyConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.data_file, PathBuf::from("x.json"));
        assert_eq!(config.survey.max_questions, 9);
    }

    #[test]
    fn legacy_port_accepts_colon_prefix() {
        assert_eq!(legacy_port(env(&[("APP_PORT", ":8080")])), Some(Ok(8080)));
        assert_eq!(legacy_port(env(&[("APP_PORT", "8081")])), Some(Ok(8081)));
        assert_eq!(
            legacy_port(env(&[("APP_PORT", "eighty")])),
            Some(Err("eighty".to_string()))
        );
        assert_eq!(legacy_port(env(&[("OTHER", "1")])), None);
    }

    #[test]
    fn single_underscore_keys_are_flagged() {
        let warnings = collect_config_warnings(env(&[
            ("SURVEY_SERVER_PORT", "1"),
            ("SURVEY_SERVER__PORT", "1"),
            ("SURVEY_LOG", "debug"),
            ("PATH", "/bin"),
        ]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("SURVEY_SERVER_PORT"));
        assert!(warnings[0].contains("SURVEY_SERVER__PORT"));
    }
}
