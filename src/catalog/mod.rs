// SPDX-License-Identifier: PMPL-1.0-or-later

//! The action catalog.
//!
//! [`Action`] is generated by the build script from `data/actions/*.yaml`,
//! the same files the label table comes from, so the catalog and the table
//! always have the same length. Variant names drop the `Act` prefix of the
//! platform identifiers: `ActSeeSysInf` is `Action::SeeSysInf`, and
//! [`Action::name`] gives the identifier back.

mod tab;

pub use tab::Tab;

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/actions_generated.rs"));

impl Action {
    /// Position in the catalog, `0..ACTION_COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Checked conversion from a raw index.
    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    /// Platform identifier, e.g. `"ActAll"`.
    pub fn name(self) -> &'static str {
        ACTION_NAMES[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Action> {
        ACTION_BY_NAME.get(name).copied()
    }

    pub fn tab(self) -> Tab {
        ACTION_TABS[self.index()]
    }

    /// Section of the tab the action is listed under, e.g. `"Log in"`.
    pub fn section(self) -> &'static str {
        ACTION_SECTIONS[self.index()]
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Action> + ExactSizeIterator {
        Action::ALL.iter().copied()
    }

    /// Parse either a platform identifier or a decimal index.
    pub fn parse_selector(selector: &str) -> Result<Action> {
        let selector = selector.trim();
        if let Some(action) = Action::from_name(selector) {
            return Ok(action);
        }
        match selector.parse::<usize>() {
            Ok(index) => Action::from_index(index).ok_or(Error::ActionOutOfRange {
                index,
                count: ACTION_COUNT,
            }),
            Err(_) => Err(Error::UnknownAction(selector.to_string())),
        }
    }
}

impl TryFrom<u16> for Action {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Action::from_index(value as usize).ok_or(Error::ActionOutOfRange {
            index: value as usize,
            count: ACTION_COUNT,
        })
    }
}

impl From<Action> for u16 {
    fn from(action: Action) -> Self {
        action as u16
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::from_name(s).ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
