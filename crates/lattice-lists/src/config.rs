//! Adapter configuration.
//!
//! [`AdapterConfig`] collects the caller-settable presentation options of an
//! adapter. It can be built in code with the `with_*` methods or loaded from
//! TOML:
//!
//! ```toml
//! divider_style = "just_sub_header_predecessors"
//! divider_color = "#0000001F"
//! divider_inset = true
//! suppress_clicks_while_checking = true
//!
//! [sub_header]
//! accent_text = true
//! shifted = false
//! ```
//!
//! Missing keys take their default. The header handle is runtime state and
//! is never part of the configuration.

use std::fs;
use std::path::Path;

use lattice_lists_core::Color;
use lattice_lists_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::adapter::DividerStyle;
use crate::error::{ConfigError, ConfigResult};

/// Presentation of sub-header rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubHeaderStyle {
    /// Text is drawn in the accent color.
    pub accent_text: bool,
    /// Text is shifted to the 72 dp content keyline.
    pub shifted: bool,
}

/// Caller-settable adapter options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Which rows draw a divider.
    pub divider_style: DividerStyle,
    /// Divider color.
    pub divider_color: Color,
    /// Dividers start at the 72 dp content keyline.
    pub divider_inset: bool,
    /// While a checking session is active, clicks toggle items instead of
    /// reaching the click delegates.
    pub suppress_clicks_while_checking: bool,
    /// Sub-header presentation.
    pub sub_header: SubHeaderStyle,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            divider_style: DividerStyle::None,
            divider_color: Color::MATERIAL_LIGHT_DIVIDER,
            divider_inset: false,
            suppress_clicks_while_checking: true,
            sub_header: SubHeaderStyle::default(),
        }
    }
}

impl AdapterConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the divider style.
    pub fn with_divider_style(mut self, style: DividerStyle) -> Self {
        self.divider_style = style;
        self
    }

    /// Set the divider color.
    pub fn with_divider_color(mut self, color: Color) -> Self {
        self.divider_color = color;
        self
    }

    /// Set whether dividers start at the content keyline.
    pub fn with_divider_inset(mut self, inset: bool) -> Self {
        self.divider_inset = inset;
        self
    }

    /// Set whether clicks are routed to toggling while checking.
    pub fn with_suppress_clicks_while_checking(mut self, suppress: bool) -> Self {
        self.suppress_clicks_while_checking = suppress;
        self
    }

    /// Set the sub-header presentation.
    pub fn with_sub_header(mut self, style: SubHeaderStyle) -> Self {
        self.sub_header = style;
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config = toml::from_str(text)?;
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            ?config,
            "loaded adapter config"
        );
        Ok(config)
    }

    /// Write the configuration to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|e| ConfigError::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "saved adapter config");
        Ok(())
    }
}
