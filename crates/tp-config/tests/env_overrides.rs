//! Environment variable precedence over file and default sources.

use figment::Jail;
use pretty_assertions::assert_eq;
use tp_config::TutorConfig;

#[test]
fn prefixed_env_vars_nest_with_double_underscore() {
    Jail::expect_with(|jail| {
        jail.set_env("TUTORPILOT_API__TIMEOUT_SECS", "90");
        jail.set_env("TUTORPILOT_DEFAULTS__TUTOR_ID", "tut-env");
        jail.set_env("TUTORPILOT_DEFAULTS__STRATEGY_WEEKS", "8");

        let config = TutorConfig::from_figment(&TutorConfig::figment_with(None))
            .expect("config loads");
        assert_eq!(config.api.timeout_secs, 90);
        assert_eq!(config.defaults.tutor_id, "tut-env");
        assert_eq!(config.defaults.strategy_weeks, 8);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tutorpilot")?;
        jail.create_file(
            ".tutorpilot/config.toml",
            r#"
[api]
base_url = "http://from-toml:8000"
timeout_secs = 10
"#,
        )?;
        jail.set_env("TUTORPILOT_API__TIMEOUT_SECS", "20");

        let config = TutorConfig::from_figment(&TutorConfig::figment_with(None))
            .expect("config loads");
        assert_eq!(config.api.base_url, "http://from-toml:8000");
        assert_eq!(config.api.timeout_secs, 20);
        Ok(())
    });
}

#[test]
fn api_url_variable_sets_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("TUTORPILOT_API_URL", "https://staging.example.com/");

        let config = TutorConfig::from_figment(&TutorConfig::figment_with(None))
            .expect("config loads");
        assert_eq!(config.api.base_url, "https://staging.example.com");
        Ok(())
    });
}

#[test]
fn api_url_variable_beats_nested_env_and_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tutorpilot")?;
        jail.create_file(
            ".tutorpilot/config.toml",
            r#"
[api]
base_url = "http://from-toml:8000"
"#,
        )?;
        jail.set_env("TUTORPILOT_API__BASE_URL", "http://from-nested-env:8000");
        jail.set_env("TUTORPILOT_API_URL", "http://from-api-url:8000");

        let config = TutorConfig::from_figment(&TutorConfig::figment_with(None))
            .expect("config loads");
        assert_eq!(config.api.base_url, "http://from-api-url:8000");
        Ok(())
    });
}

#[test]
fn invalid_api_url_variable_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("TUTORPILOT_API_URL", "not a url");
        assert!(TutorConfig::from_figment(&TutorConfig::figment_with(None)).is_err());
        Ok(())
    });
}
