// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lanyard — Core error type, configuration, and small enums shared by the
// utility crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::LangConfig;
pub use error::{LanyardError, Result};
pub use types::*;
