//! User intents and their wire names.
//!
//! Rendered elements carry an action name in their `events` map; the page
//! script posts that name back to `/actions/{action}` where it is parsed
//! into an [`Action`].
//!
//! ```text
//! home              logo click
//! tab:<tab>         header menu link
//! modal:<modal>     header icon (search, bag)
//! profile           profile icon (profile or sign-in, depending on session)
//! close             modal close button / backdrop
//! select:<id>       product image, bag item name
//! add:<id>          detail panel "ADD TO BAG"
//! remove:<id>       bag item "REMOVE"
//! search:<text>     search submit
//! clear-search      current-search banner "X"
//! sign-out          profile "SIGN OUT"
//! ```

use core::fmt;
use core::str::FromStr;

use hollixton_core::{ItemId, Modal, Tab};
use thiserror::Error;

/// Error parsing an action name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("unknown action: {0}")]
    Unknown(String),
    #[error("action {action} needs an argument")]
    MissingArgument { action: &'static str },
    #[error("invalid argument for {action}: {reason}")]
    InvalidArgument {
        action: &'static str,
        reason: String,
    },
}

/// Something the shopper did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Home,
    ShowTab(Tab),
    OpenModal(Modal),
    OpenProfile,
    CloseModal,
    SelectItem(ItemId),
    AddToBag(ItemId),
    RemoveFromBag(ItemId),
    Search(String),
    ClearSearch,
    SignOut,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::ShowTab(tab) => write!(f, "tab:{}", tab.as_str().to_ascii_lowercase()),
            Self::OpenModal(modal) => write!(f, "modal:{}", modal.slug()),
            Self::OpenProfile => f.write_str("profile"),
            Self::CloseModal => f.write_str("close"),
            Self::SelectItem(id) => write!(f, "select:{id}"),
            Self::AddToBag(id) => write!(f, "add:{id}"),
            Self::RemoveFromBag(id) => write!(f, "remove:{id}"),
            Self::Search(text) => write!(f, "search:{text}"),
            Self::ClearSearch => f.write_str("clear-search"),
            Self::SignOut => f.write_str("sign-out"),
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match name {
            "home" => Ok(Self::Home),
            "profile" => Ok(Self::OpenProfile),
            "close" => Ok(Self::CloseModal),
            "clear-search" => Ok(Self::ClearSearch),
            "sign-out" => Ok(Self::SignOut),
            "search" => Ok(Self::Search(arg.unwrap_or_default().to_owned())),
            "tab" => require(arg, "tab")?
                .parse()
                .map(Self::ShowTab)
                .map_err(|e| invalid("tab", &e)),
            "modal" => require(arg, "modal")?
                .parse()
                .map(Self::OpenModal)
                .map_err(|e| invalid("modal", &e)),
            "select" => item_id(arg, "select").map(Self::SelectItem),
            "add" => item_id(arg, "add").map(Self::AddToBag),
            "remove" => item_id(arg, "remove").map(Self::RemoveFromBag),
            _ => Err(ActionParseError::Unknown(s.to_owned())),
        }
    }
}

fn require<'a>(arg: Option<&'a str>, action: &'static str) -> Result<&'a str, ActionParseError> {
    arg.filter(|arg| !arg.is_empty())
        .ok_or(ActionParseError::MissingArgument { action })
}

fn invalid(action: &'static str, reason: &impl fmt::Display) -> ActionParseError {
    ActionParseError::InvalidArgument {
        action,
        reason: reason.to_string(),
    }
}

fn item_id(arg: Option<&str>, action: &'static str) -> Result<ItemId, ActionParseError> {
    require(arg, action)?
        .parse()
        .map_err(|e| invalid(action, &e))
}
