#![forbid(unsafe_code)]

//! Single-pass menu text parser.
//!
//! A menu is declared as one flat string. Each item is a dash run (the
//! nesting level, one dash = top level), a label, a `:` terminator, and a
//! three-digit action code:
//!
//! ```text
//! -READ:000
//! --SENSORS:000
//! ---SENSOR A1:101
//! ---SENSOR A2:102
//! -MOVE SERVOS:107
//! ```
//!
//! `000` marks a submenu container; any other code is an opaque value the
//! host application interprets. ASCII whitespace between items is skipped,
//! so a menu reads naturally from a multi-line string literal; the fully
//! concatenated form parses to the same table.
//!
//! Parent links are resolved in the same left-to-right pass with a
//! fixed-depth stack of open submenus and a one-item lookahead on the next
//! dash run: a deeper next item means the current one gains a child (push
//! it as the open parent and point its eldest link at the upcoming index),
//! a shallower next item pops one open parent per level closed, and an
//! equal level leaves the stack alone. No second pass, no back-patching.

use std::fmt;

use memchr::memchr;

use crate::node::{MenuNode, NodeId, NodeTable};

/// Maximum nesting depth a menu may use.
pub const MAX_DEPTH: usize = 8;

/// Errors reported while parsing a menu description.
///
/// `item` fields are 1-based ordinals in source order, so a host can point
/// at the offending line of its menu declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text contains no items at all.
    Empty,
    /// An item has no `:` terminator before the end of the text.
    MissingTerminator { item: usize },
    /// The action field is not exactly three ASCII digits.
    BadAction { item: usize, found: String },
    /// An item has no leading dash run.
    MissingLevel { item: usize },
    /// An item nests deeper than [`MAX_DEPTH`].
    TooDeep { item: usize, level: usize },
    /// An item is more than one level deeper than its predecessor.
    LevelSkip { item: usize, from: usize, to: usize },
    /// The menu has more items than node indices can address.
    TooManyItems { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "menu text contains no items"),
            Self::MissingTerminator { item } => {
                write!(f, "item {item}: missing ':' terminator")
            }
            Self::BadAction { item, found } => {
                write!(f, "item {item}: action field must be three digits, found {found:?}")
            }
            Self::MissingLevel { item } => {
                write!(f, "item {item}: expected a leading dash run")
            }
            Self::TooDeep { item, level } => {
                write!(f, "item {item}: level {level} exceeds the maximum depth of {MAX_DEPTH}")
            }
            Self::LevelSkip { item, from, to } => {
                write!(f, "item {item}: level jumps from {from} to {to} (children nest one level at a time)")
            }
            Self::TooManyItems { limit } => {
                write!(f, "menu exceeds the maximum of {limit} items")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a menu description into a [`NodeTable`].
///
/// One left-to-right pass over the text; auxiliary state is a
/// [`MAX_DEPTH`]-deep stack of open parent indices. Malformed input is a
/// hard error naming the offending item; a returned table always satisfies
/// the tree invariants the navigation queries rely on.
pub fn parse(text: impl Into<String>) -> Result<NodeTable, ParseError> {
    let source = text.into();
    let bytes = source.as_bytes();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("menu_parse", bytes = bytes.len()).entered();

    let mut pos = 0usize;
    skip_whitespace(bytes, &mut pos);
    if pos == bytes.len() {
        return Err(ParseError::Empty);
    }

    let mut level = dash_run(bytes, &mut pos);
    if level == 0 {
        return Err(ParseError::MissingLevel { item: 1 });
    }
    if level != 1 {
        return Err(ParseError::LevelSkip { item: 1, from: 0, to: level });
    }

    let mut nodes = vec![MenuNode {
        label_start: 0,
        label_end: 0,
        parent: NodeId::ROOT,
        eldest: None,
        action: 0,
    }];
    // Open submenu chain, deepest last. An item at level L has L-1 open
    // parents, so MAX_DEPTH slots cover every legal level.
    let mut stack = [NodeId::ROOT; MAX_DEPTH];
    let mut depth = 0usize;
    let mut item = 1usize;

    loop {
        // One index is reserved for the sentinel and one must stay free so
        // an eldest link to the following item cannot overflow.
        if item >= u16::MAX as usize {
            return Err(ParseError::TooManyItems { limit: u16::MAX as usize - 1 });
        }

        let label_start = pos;
        let Some(rel) = memchr(b':', &bytes[pos..]) else {
            return Err(ParseError::MissingTerminator { item });
        };
        let label_end = pos + rel;
        pos = label_end + 1;

        let action = match bytes.get(pos..pos + 3) {
            Some(field) if field.iter().all(u8::is_ascii_digit) => {
                u16::from(field[0] - b'0') * 100
                    + u16::from(field[1] - b'0') * 10
                    + u16::from(field[2] - b'0')
            }
            _ => {
                let end = bytes.len().min(pos + 3);
                return Err(ParseError::BadAction {
                    item,
                    found: String::from_utf8_lossy(&bytes[pos..end]).into_owned(),
                });
            }
        };
        pos += 3;

        let parent = if depth == 0 { NodeId::ROOT } else { stack[depth - 1] };
        nodes.push(MenuNode {
            label_start,
            label_end,
            parent,
            eldest: None,
            action,
        });

        // Lookahead: the next item's dash run decides whether this item
        // just became a parent, and its eldest link can be set before the
        // child is even parsed.
        skip_whitespace(bytes, &mut pos);
        if pos == bytes.len() {
            break;
        }
        let next_level = dash_run(bytes, &mut pos);
        if next_level == 0 {
            return Err(ParseError::MissingLevel { item: item + 1 });
        }
        if next_level > MAX_DEPTH {
            return Err(ParseError::TooDeep { item: item + 1, level: next_level });
        }
        if next_level > level {
            if next_level != level + 1 {
                return Err(ParseError::LevelSkip { item: item + 1, from: level, to: next_level });
            }
            stack[depth] = NodeId::new(item as u16);
            depth += 1;
            nodes[item].eldest = Some(NodeId::new(item as u16 + 1));
        } else {
            depth -= level - next_level;
        }
        item += 1;
        level = next_level;
    }

    nodes[0].eldest = Some(NodeId::new(1));

    #[cfg(feature = "tracing")]
    tracing::debug!(items = nodes.len() - 1, "menu parsed");

    Ok(NodeTable { source, nodes })
}

fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}

fn dash_run(bytes: &[u8], pos: &mut usize) -> usize {
    let mut run = 0;
    while *pos < bytes.len() && bytes[*pos] == b'-' {
        *pos += 1;
        run += 1;
    }
    run
}
