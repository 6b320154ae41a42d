#![forbid(unsafe_code)]

//! Core: menu text parsing and index-based tree navigation.
//!
//! # Role in dashmenu
//! `dashmenu-core` is the data layer. It owns the menu grammar, the
//! single-pass parser, and the node arena that everything else navigates.
//!
//! # Primary responsibilities
//! - **[`NodeTable`]**: arena of parsed items addressed by dense [`NodeId`]s,
//!   with labels borrowed from the one retained copy of the source text.
//! - **[`parse()`]**: one left-to-right pass with a fixed-depth submenu stack;
//!   malformed menus fail fast with the offending item's ordinal.
//! - **Navigation**: parent/eldest/sibling/rank queries built on plain
//!   indices, total by construction.
//!
//! # How it fits in the system
//! The engine crate (`dashmenu`) holds the selection cursor and dirty flag,
//! projects sibling groups onto LCD rows, and maps keypad values to
//! directions; every move it makes is one of the queries exposed here.

pub mod nav;
pub mod node;
pub mod parse;

pub use node::{NodeId, NodeTable};
pub use parse::{MAX_DEPTH, ParseError, parse};
