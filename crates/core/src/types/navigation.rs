//! Navigation state: catalog tabs and modal overlays.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Item};

/// Error returned when a tab or modal name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {name}")]
pub struct NavigationParseError {
    kind: &'static str,
    name: String,
}

/// Top-level catalog view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Girls,
    Guys,
    Sale,
}

impl Tab {
    /// Tabs offered as header links, in display order. Home is reached
    /// through the logo.
    pub const MENU: [Self; 3] = [Self::Girls, Self::Guys, Self::Sale];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Girls => "Girls",
            Self::Guys => "Guys",
            Self::Sale => "Sale",
        }
    }

    /// Whether `item` belongs on this tab.
    #[must_use]
    pub fn admits(self, item: &Item) -> bool {
        match self {
            Self::Home => true,
            Self::Girls => item.category == Category::Girls,
            Self::Guys => item.category == Category::Guys,
            Self::Sale => item.is_discounted(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = NavigationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "girls" => Ok(Self::Girls),
            "guys" => Ok(Self::Guys),
            "sale" => Ok(Self::Sale),
            _ => Err(NavigationParseError {
                kind: "tab",
                name: s.to_owned(),
            }),
        }
    }
}

/// Transient overlay view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modal {
    Search,
    Profile,
    SignIn,
    Bag,
}

impl Modal {
    /// Lowercase name used in action strings and CSS classes.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Profile => "profile",
            Self::SignIn => "sign-in",
            Self::Bag => "bag",
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Modal {
    type Err = NavigationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "profile" => Ok(Self::Profile),
            "sign-in" | "signin" => Ok(Self::SignIn),
            "bag" => Ok(Self::Bag),
            _ => Err(NavigationParseError {
                kind: "modal",
                name: s.to_owned(),
            }),
        }
    }
}
