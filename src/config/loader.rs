use super::types::*;
use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub detection: DetectionConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the given config file, falling back to built-in defaults when
    /// it does not exist.
    pub fn load_with_fallback<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            Self::load(config_path)
        } else {
            tracing::debug!(
                "Config file {} not found, using built-in defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let detection = &self.detection;

        if detection.max_shorts_duration_secs == 0 {
            return Err(Error::validation(
                "max_shorts_duration_secs must be greater than 0",
            ));
        }

        if detection.very_short_duration_secs > detection.max_shorts_duration_secs {
            return Err(Error::validation(format!(
                "very_short_duration_secs ({}) must not exceed max_shorts_duration_secs ({})",
                detection.very_short_duration_secs, detection.max_shorts_duration_secs
            )));
        }

        if !(0.0..=1.0).contains(&detection.confidence_threshold)
            || detection.confidence_threshold == 0.0
        {
            return Err(Error::validation(format!(
                "confidence_threshold must be within (0, 1], got {}",
                detection.confidence_threshold
            )));
        }

        if detection.batch_concurrency == 0 {
            return Err(Error::validation("batch_concurrency must be greater than 0"));
        }

        if detection.shorts_keywords.is_empty() {
            return Err(Error::validation(
                "At least one shorts keyword must be defined",
            ));
        }

        if detection.live_keywords.is_empty() {
            return Err(Error::validation(
                "At least one live keyword must be defined",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection.max_shorts_duration_secs, 60);
        assert_eq!(config.detection.confidence_threshold, 0.6);
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.detection.confidence_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.very_short_duration_secs = 90;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.shorts_keywords.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.batch_concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_from_string() {
        let yaml = r##"
logging:
  level: "debug"
  show_timestamps: false
  colored_output: true

detection:
  max_shorts_duration_secs: 60
  very_short_duration_secs: 30
  confidence_threshold: 0.6
  batch_concurrency: 8
  shorts_keywords: ["#shorts", "shorts"]
  live_keywords: ["live", "streaming"]
"##;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.show_timestamps);
        assert_eq!(config.detection.batch_concurrency, 8);
        assert_eq!(config.detection.shorts_keywords.len(), 2);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "logging:\n  level: \"warn\"\n  show_timestamps: true\n  colored_output: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.detection, DetectionConfig::default());
    }

    #[test]
    fn test_load_with_fallback_missing_file() {
        let config = Config::load_with_fallback("/nonexistent/shorts-lens.yaml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "detection:\n  max_shorts_duration_secs: 90\n  very_short_duration_secs: 45"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.detection.max_shorts_duration_secs, 90);
        assert_eq!(config.detection.very_short_duration_secs, 45);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
