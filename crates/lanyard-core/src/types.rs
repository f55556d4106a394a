// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Small shared enums used by more than one utility module.

use serde::{Deserialize, Serialize};

/// Where absent (`None`) values sort relative to present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullOrdering {
    /// `None` sorts before every `Some`.
    #[default]
    First,
    /// `None` sorts after every `Some`.
    Last,
}

impl NullOrdering {
    /// Ordering of an absent value against a present one.
    pub fn absent_vs_present(&self) -> std::cmp::Ordering {
        match self {
            Self::First => std::cmp::Ordering::Less,
            Self::Last => std::cmp::Ordering::Greater,
        }
    }
}

/// Which side(s) of a string receive padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadSide {
    Left,
    Right,
    /// Split evenly; the odd char goes on the right.
    Both,
}
