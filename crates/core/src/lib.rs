//! Naked Pineapple Core - Shared cart types.
//!
//! This crate provides the types shared by the cart store and its front ends:
//! - `cart` - Cart state manager (reducer, persistence, identity scoping)
//! - `cli` - Command-line front end over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, line items and identities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
