// Copyright 2025 Node Efficiency Index Contributors
// SPDX-License-Identifier: Apache-2.0

//! Layered settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`nei.toml` in the working directory, or an explicit path)
//! 3. Environment variables, e.g. `NEI_WEIGHTS__ALPHA=0.4` or `NEI_STRICT=true`

use crate::calculator::EfficiencyCalculator;
use crate::error::Result;
use crate::weights::Weights;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "nei.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NEI";

/// Runtime settings for the calculator and its drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Sensitivity weights.
    pub weights: Weights,
    /// Reject negative or non-finite snapshot fields instead of computing.
    pub strict: bool,
    /// Logging settings.
    pub log: LogSettings,
}

/// Logging settings, consumed by the CLI when installing a subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            strict: false,
            log: LogSettings {
                level: "warn".to_string(),
                json: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the process environment.
    ///
    /// With `path` set the file must exist; otherwise `nei.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::build(path, env_source())
    }

    /// Build a calculator from these settings.
    pub fn calculator(&self) -> EfficiencyCalculator {
        EfficiencyCalculator::new(self.weights)
    }

    fn build(path: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Settings::default();

        let builder = Config::builder()
            .set_default("weights.alpha", defaults.weights.alpha)?
            .set_default("weights.beta", defaults.weights.beta)?
            .set_default("weights.gamma", defaults.weights.gamma)?
            .set_default("strict", defaults.strict)?
            .set_default("log.level", defaults.log.level)?
            .set_default("log.json", defaults.log.json)?;

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let settings = builder
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
