//! Route drawing configuration.
//!
//! Every field has a default, so a partial document only overrides what it
//! names:
//!
//! ```toml
//! [stroke]
//! width = 3.0
//! line_join = "miter"
//! dash = [6.0, 4.0]
//! ```

use gmapkit_core::{LineCap, LineJoin, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Default stroke used for routes that do not carry their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    /// Line width in pixels
    pub width: f32,
    pub color: Rgba,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    /// Ratio of miter length to half width beyond which miters become bevels
    pub miter_limit: f32,
    /// Alternating on/off lengths in pixels
    pub dash: Option<Vec<f32>>,
    pub dash_offset: f32,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            width: 5.0,
            color: Rgba::MIDNIGHT_BLUE.with_alpha(144),
            line_join: LineJoin::Round,
            line_cap: LineCap::Butt,
            miter_limit: 10.0,
            dash: None,
            dash_offset: 0.0,
        }
    }
}

impl StrokeSettings {
    /// Checks the values a renderer cannot draw with.
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SettingsError::invalid(
                "stroke.width",
                format!("must be a positive number, got {}", self.width),
            ));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(SettingsError::invalid(
                "stroke.miter_limit",
                format!("must be at least 1, got {}", self.miter_limit),
            ));
        }
        if !self.dash_offset.is_finite() {
            return Err(SettingsError::invalid("stroke.dash_offset", "must be finite"));
        }
        if let Some(dash) = &self.dash {
            if dash.len() < 2 || dash.len() % 2 != 0 {
                return Err(SettingsError::invalid(
                    "stroke.dash",
                    "needs an even number of on/off lengths",
                ));
            }
            if dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
                return Err(SettingsError::invalid(
                    "stroke.dash",
                    "lengths must be finite and non-negative",
                ));
            }
            if dash.iter().sum::<f32>() <= 0.0 {
                return Err(SettingsError::invalid("stroke.dash", "pattern has zero length"));
            }
        }
        Ok(())
    }
}

/// Top-level route configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
    pub stroke: StrokeSettings,
}

impl RouteSettings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        tracing::debug!("Loaded route settings from TOML: {:?}", settings.stroke);
        Ok(settings)
    }

    /// Parses and validates settings from JSON text.
    pub fn from_json_str(text: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        tracing::debug!("Loaded route settings from JSON: {:?}", settings.stroke);
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.stroke.validate()
    }
}
