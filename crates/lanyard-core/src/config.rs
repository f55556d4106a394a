// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Library configuration: defaults applied by the convenience entry points.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::types::NullOrdering;

/// Persistent defaults for the utility functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangConfig {
    /// Marker appended (or prepended) when a string is abbreviated.
    pub abbreviation_marker: String,
    /// Where `None` sorts in null-safe comparisons.
    pub null_ordering: NullOrdering,
    /// Tolerance for date comparisons, in milliseconds.
    pub date_epsilon_ms: u64,
    /// strftime-style pattern used when no explicit pattern is given.
    pub date_pattern: String,
    /// URL-encode spaces as `+` (form encoding) rather than `%20`.
    pub url_space_as_plus: bool,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            abbreviation_marker: "...".into(),
            null_ordering: NullOrdering::First,
            date_epsilon_ms: 1,
            date_pattern: "%Y-%m-%d %H:%M:%S".into(),
            url_space_as_plus: true,
        }
    }
}

impl LangConfig {
    /// Read a config from a JSON file. Fields missing from the file keep
    /// their defaults.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&data)?;
        debug!("config loaded");
        Ok(config)
    }

    /// Like [`LangConfig::load`], but falls back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.as_ref().display(), "using default config");
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        debug!("config saved");
        Ok(())
    }
}
