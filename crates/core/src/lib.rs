//! Hollixton Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - catalog items and their categories
//! - bag entries and the bag itself
//! - the signed-in customer
//! - navigation (tabs and modals)
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no rendering. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and emails, plus
//!   the catalog, bag, customer and navigation types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
