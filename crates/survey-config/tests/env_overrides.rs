use figment::Jail;
use survey_config::{ConfigError, SurveyConfig};

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("SURVEY_SERVER__PORT", "9001");
        jail.set_env("SURVEY_STORAGE__DATA_FILE", "other.json");
        jail.set_env("SURVEY_SURVEY__MAX_QUESTIONS", "4");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.storage.data_file.to_str(), Some("other.json"));
        assert_eq!(config.survey.max_questions, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(survey_config::LOCAL_CONFIG_FILE, "[server]\nport = 7000\n")?;
        jail.set_env("SURVEY_SERVER__PORT", "7001");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7001);
        Ok(())
    });
}

#[test]
fn load_rejects_zero_max_questions() {
    Jail::expect_with(|jail| {
        jail.set_env("SURVEY_SURVEY__MAX_QUESTIONS", "0");

        let err = SurveyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("SURVEY_SERVER__PORT", "not-a-port");

        let err = SurveyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
