use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Light/dark presentation flag. Starts light; the only transition is `toggle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown display mode '{0}', expected 'light' or 'dark'")]
pub struct UnknownMode(pub String);

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Class placed on the document root. Styling keys off this alone.
    pub fn root_class(self) -> &'static str {
        if self.is_dark() {
            "dark"
        } else {
            ""
        }
    }

    /// Label of the toggle control: names the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Dark",
            DisplayMode::Dark => "Light",
        }
    }

    /// Link that re-renders the page in the other mode.
    pub fn toggle_href(self) -> String {
        format!("/?mode={}", self.toggle())
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
