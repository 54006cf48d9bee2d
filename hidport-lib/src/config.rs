use crate::constants::DEFAULT_PATH;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Protocol spoken by the device behind the port.
///
/// The transport never interprets payloads; the identifier is carried for
/// the descriptor surface and for callers picking an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "PI30")]
    #[strum(serialize = "PI30")]
    Pi30,
    #[serde(rename = "PI18")]
    #[strum(serialize = "PI18")]
    Pi18,
}

/// Port section of a powermon-style configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortConfig {
    pub path: String,
    pub protocol: Protocol,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            protocol: Protocol::default(),
        }
    }
}

/// Serializable descriptor of a configured port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: String,
    pub protocol: Protocol,
}
