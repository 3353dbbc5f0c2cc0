//! Hollixton storefront library.
//!
//! A catalog, search, bag and sign-in storefront whose whole page is a pure
//! function of one state value. The [`shop`] runtime owns that value, the
//! [`view`] renders it to a [`dom::DomNode`] tree, and [`routes`] serves the
//! tree as HTML and accepts the shopper's actions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dom;
pub mod error;
pub mod html;
pub mod remote;
pub mod routes;
pub mod session;
pub mod shop;
pub mod state;
pub mod view;
