#![forbid(unsafe_code)]

//! Character-LCD menu engine.
//!
//! # Role in dashmenu
//! `dashmenu` is the stateful front: it owns the selection cursor, the
//! dirty flag, the display geometry, and the key mappings, and it projects
//! the visible sibling group onto physical display rows.
//!
//! # Primary responsibilities
//! - **[`Menu`]**: parse-once construction, per-key updates, and the
//!   read-only queries a host sketch polls between events.
//! - **[`KeyBindings`]**: keypad value to [`Direction`] translation, one
//!   mapping each for integer and character keypads.
//! - **[`LcdSize`]** and the window projection behind
//!   [`Menu::lcd_line`]: scroll-to-follow-cursor mapping of long sibling
//!   lists onto a few display rows.
//!
//! # How it fits in the system
//! The data layer lives in `dashmenu-core`: the grammar, the node arena,
//! and the index-based navigation queries. This crate layers the mutable
//! state and the display/input policies on top. The physical LCD driver,
//! the keypad driver, and the dispatch of action codes stay in the host.

pub mod keymap;
pub mod menu;
pub mod screen;

pub use dashmenu_core::{MAX_DEPTH, NodeId, NodeTable, ParseError};
pub use keymap::{Direction, KeyBindings};
pub use menu::Menu;
pub use screen::LcdSize;
