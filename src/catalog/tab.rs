// SPDX-License-Identifier: PMPL-1.0-or-later

//! Menu tabs actions are grouped under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform menu tab. Actions outside any tab (statistics placeholders,
/// AJAX refreshes, web service entry points) belong to [`Tab::NoTab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[serde(rename = "none")]
    NoTab,
    Start,
    System,
    Country,
    Institution,
    Center,
    Degree,
    Course,
    Assessment,
    Files,
    Users,
    Messages,
    Analytics,
    Profile,
}

impl Tab {
    /// Stable lowercase key, the same one the data files use.
    pub fn key(self) -> &'static str {
        match self {
            Tab::NoTab => "none",
            Tab::Start => "start",
            Tab::System => "system",
            Tab::Country => "country",
            Tab::Institution => "institution",
            Tab::Center => "center",
            Tab::Degree => "degree",
            Tab::Course => "course",
            Tab::Assessment => "assessment",
            Tab::Files => "files",
            Tab::Users => "users",
            Tab::Messages => "messages",
            Tab::Analytics => "analytics",
            Tab::Profile => "profile",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|tab| tab.key() == key)
    }

    /// All tabs in menu order.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::NoTab,
            Tab::Start,
            Tab::System,
            Tab::Country,
            Tab::Institution,
            Tab::Center,
            Tab::Degree,
            Tab::Course,
            Tab::Assessment,
            Tab::Files,
            Tab::Users,
            Tab::Messages,
            Tab::Analytics,
            Tab::Profile,
        ]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
