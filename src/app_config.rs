use config::{Config, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    payloads: Payloads,
    report: Report,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn payloads(&self) -> &Payloads {
        &self.payloads
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}

#[derive(Debug, Deserialize)]
pub struct Payloads {
    directory: String,
    extension: String,
}

impl Payloads {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Files with any other extension are skipped.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Deserialize)]
pub struct Report {
    fail_on_mismatch: bool,
    #[serde(deserialize_with = "deserialize_level")]
    log_level: Level,
}

impl Report {
    /// Whether a payload that does not survive the round trip makes the run fail.
    pub fn fail_on_mismatch(&self) -> bool {
        self.fail_on_mismatch
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<Level>()
        .map_err(|_| Error::custom(format!("invalid log level: {}, must be one of trace, debug, info, warn or error", raw)))
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                payloads: Payloads {
                    directory: format!("{}/tests/resources/payloads", env!("CARGO_MANIFEST_DIR")),
                    extension: "json".to_string(),
                },
                report: Report {
                    fail_on_mismatch: true,
                    log_level: Level::INFO,
                },
            },
        }
    }

    pub fn directory(mut self, directory: String) -> Self {
        self.config.payloads.directory = directory;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn reads_both_sections() {
        let config = from_toml(
            r#"
            [payloads]
            directory = "payloads"
            extension = "json"

            [report]
            fail_on_mismatch = false
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.payloads().directory(), "payloads");
        assert_eq!(config.payloads().extension(), "json");
        assert!(!config.report().fail_on_mismatch());
        assert_eq!(config.report().log_level(), Level::DEBUG);
    }

    #[test]
    fn rejects_an_unknown_log_level() {
        let result = from_toml(
            r#"
            [payloads]
            directory = "payloads"
            extension = "json"

            [report]
            fail_on_mismatch = true
            log_level = "loud"
            "#,
        );

        assert!(result.is_err_and(|err| err.to_string().contains("invalid log level: loud")));
    }
}
