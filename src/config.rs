//! Loading wing and nacelle parameters from JSON.

use crate::{Nacelle, NacelleParams, Result, Wing, WingParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The parameters for a complete set of aircraft geometry. The nacelle is optional.
///
/// # Examples
///
/// ```
/// use aerostruct::AircraftConfig;
/// let json = r#"{
///     "wing": {
///         "span": 10.0, "root_chord": 1.0, "break_station": 5.0,
///         "theta1": 0.0, "theta2": 0.0, "theta3": 0.0
///     }
/// }"#;
/// let config = AircraftConfig::from_json(json).unwrap();
/// assert_eq!(config.wing.resolution, 1000);
/// assert!(config.nacelle.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub wing: WingParams,

    #[serde(default)]
    pub nacelle: Option<NacelleParams>,
}

impl AircraftConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Construct the wing and, if configured, the nacelle. Any invalid parameter is reported as
    /// a configuration error.
    pub fn build(&self) -> Result<(Wing, Option<Nacelle>)> {
        let wing = Wing::new(self.wing.clone())?;
        let nacelle = self.nacelle.clone().map(Nacelle::new).transpose()?;
        Ok((wing, nacelle))
    }
}
