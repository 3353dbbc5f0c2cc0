//! Core types for the Hollixton storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod bag;
pub mod catalog;
pub mod customer;
pub mod email;
pub mod id;
pub mod navigation;
pub mod price;

pub use bag::{Bag, BagItem};
pub use catalog::{Category, Item};
pub use customer::{Account, Customer};
pub use email::{Email, EmailError};
pub use id::*;
pub use navigation::{Modal, NavigationParseError, Tab};
pub use price::Price;
