use super::ConfigurationError;
use crate::{route::DEFAULT_EDGE_SEQUENCE_SEPARATOR, schedule::DEFAULT_STOP_ID_DELIMITER};
use serde::{Deserialize, Serialize};

/// defines behaviors for a route mapping run. every field is optional in a
/// configuration file and falls back to its default.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RouteMappingConfig {
    /// stop ids are cut at the first occurrence of this delimiter. an empty
    /// delimiter keeps stop ids whole.
    pub stop_id_delimiter: String,
    /// joins edge ids in the `edge_sequence` output column
    pub edge_sequence_separator: String,
    /// replace existing output files
    pub overwrite: bool,
}

impl Default for RouteMappingConfig {
    fn default() -> Self {
        Self {
            stop_id_delimiter: String::from(DEFAULT_STOP_ID_DELIMITER),
            edge_sequence_separator: String::from(DEFAULT_EDGE_SEQUENCE_SEPARATOR),
            overwrite: false,
        }
    }
}

impl RouteMappingConfig {
    /// loads the configuration file if one is given, otherwise the defaults.
    /// `overwrite` set on the command line takes precedence over the file.
    pub fn load(
        configuration_file: Option<&String>,
        overwrite: bool,
    ) -> Result<RouteMappingConfig, ConfigurationError> {
        let mut config = match configuration_file {
            Some(f) => RouteMappingConfig::try_from(f)?,
            None => RouteMappingConfig::default(),
        };
        config.overwrite = config.overwrite || overwrite;
        Ok(config)
    }
}

impl TryFrom<&String> for RouteMappingConfig {
    type Error = ConfigurationError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| ConfigurationError::ReadError(f.clone(), e))?;
            toml::from_str(&s).map_err(|e| ConfigurationError::DecodeError(f.clone(), e.to_string()))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| ConfigurationError::ReadError(f.clone(), e))?;
            serde_json::from_str(&s)
                .map_err(|e| ConfigurationError::DecodeError(f.clone(), e.to_string()))
        } else {
            Err(ConfigurationError::UnsupportedFileType(f.clone()))
        }
    }
}
