#![forbid(unsafe_code)]

//! The stateful menu engine.
//!
//! [`Menu`] owns a parsed [`NodeTable`], the selection cursor, and the
//! dirty flag the host polls to know when the display is stale. The host
//! feeds it one key per detected event; every call completes before it
//! returns and the cursor is the whole state of the input machine.

use dashmenu_core::{NodeId, NodeTable, ParseError, parse};

use crate::keymap::{Direction, KeyBindings};
use crate::screen::{LcdSize, clip, window_rank};

/// Marker prefixed to the selected item's display line.
const CURSOR_MARKER: char = '>';

/// A navigable menu built from a flat text description.
///
/// # Example
///
/// ```
/// use dashmenu::{Direction, Menu};
///
/// let mut menu = Menu::new(
///     "-READ:000
///      --SENSOR A1:101
///      --SENSOR A2:102
///      -MOVE SERVOS:107",
/// )?;
/// assert_eq!(menu.current_label(), "READ");
///
/// // READ is a submenu: Right descends to its first child.
/// assert_eq!(menu.navigate(Direction::Right), 0);
/// assert_eq!(menu.current_label(), "SENSOR A1");
///
/// // SENSOR A1 is a leaf: Right hands its action code to the host.
/// assert_eq!(menu.navigate(Direction::Right), 101);
/// # Ok::<(), dashmenu::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    table: NodeTable,
    cursor: NodeId,
    needs_redraw: bool,
    lcd: LcdSize,
    int_keys: Option<KeyBindings<i32>>,
    char_keys: Option<KeyBindings<char>>,
}

impl Menu {
    /// Parse `text` and select its first item.
    ///
    /// The dirty flag starts raised so the host draws the initial state.
    pub fn new(text: impl Into<String>) -> Result<Self, ParseError> {
        let table = parse(text)?;
        let cursor = table.first();
        Ok(Self {
            table,
            cursor,
            needs_redraw: true,
            lcd: LcdSize::default(),
            int_keys: None,
            char_keys: None,
        })
    }

    /// Set the display geometry (defaults to 16x2).
    pub fn set_lcd(&mut self, lcd: LcdSize) {
        self.lcd = lcd;
    }

    /// Install the mapping for keypads that report integers.
    pub fn map_int_keys(&mut self, keys: KeyBindings<i32>) {
        self.int_keys = Some(keys);
    }

    /// Install the mapping for keypads that report characters.
    pub fn map_char_keys(&mut self, keys: KeyBindings<char>) {
        self.char_keys = Some(keys);
    }

    /// Read-only access to the parsed node arena.
    #[must_use]
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    /// Currently selected item.
    #[must_use]
    pub fn current(&self) -> NodeId {
        self.cursor
    }

    /// Label of the currently selected item.
    #[must_use]
    pub fn current_label(&self) -> &str {
        self.table.label(self.cursor)
    }

    /// Action code of the currently selected item (0 for submenus).
    #[must_use]
    pub fn current_action(&self) -> u16 {
        self.table.action(self.cursor)
    }

    /// First item whose label equals `label`.
    #[must_use]
    pub fn item_number(&self, label: &str) -> Option<NodeId> {
        self.table.ids().find(|&n| self.table.label(n) == label)
    }

    /// Force the cursor to `n`, clamped to the table's item range.
    pub fn select(&mut self, n: NodeId) {
        let n = self.table.clamp(n);
        self.cursor = if n == NodeId::ROOT { self.table.first() } else { n };
    }

    /// Apply one logical direction to the cursor.
    ///
    /// Up and Down move between siblings (no-ops at the edges). Left
    /// ascends to the parent unless the cursor is already at the top
    /// level. Right either returns the selected leaf's action code
    /// without moving, or descends into a submenu. The return value is 0
    /// whenever no action is handed to the host; the dirty flag is raised
    /// iff the cursor moved.
    pub fn navigate(&mut self, direction: Direction) -> u16 {
        let from = self.cursor;
        match direction {
            Direction::Up => self.cursor = self.table.previous_sibling(from),
            Direction::Down => self.cursor = self.table.next_sibling(from),
            Direction::Left => {
                let parent = self.table.parent(from);
                if parent != NodeId::ROOT {
                    self.cursor = parent;
                }
            }
            Direction::Right => {
                let action = self.table.action(from);
                if action > 0 {
                    return action;
                }
                if let Some(child) = self.table.eldest(from) {
                    self.cursor = child;
                }
            }
        }
        if self.cursor != from {
            self.needs_redraw = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(from = %from, to = %self.cursor, "cursor moved");
        }
        0
    }

    /// Handle one key from an integer keypad.
    ///
    /// Returns the action code to perform, or 0 to keep displaying the
    /// menu. A zero key and unmapped keys are no-ops.
    pub fn handle_key(&mut self, key: i32) -> u16 {
        if key == 0 {
            return 0;
        }
        let Some(keys) = self.int_keys else {
            return 0;
        };
        match keys.direction_of(key) {
            Some(direction) => self.navigate(direction),
            None => 0,
        }
    }

    /// Handle one key from a character keypad.
    ///
    /// Same contract as [`handle_key`](Self::handle_key); NUL is the
    /// no-op key.
    pub fn handle_char(&mut self, key: char) -> u16 {
        if key == '\0' {
            return 0;
        }
        let Some(keys) = self.char_keys else {
            return 0;
        };
        match keys.direction_of(key) {
            Some(direction) => self.navigate(direction),
            None => 0,
        }
    }

    /// Text for physical display row `row` (0-indexed): the cursor marker
    /// or a space, then the item's label clipped to the column count.
    /// Empty when the cursor's sibling group has no item for that row.
    #[must_use]
    pub fn lcd_line(&self, row: u16) -> String {
        let rank = self.table.rank(self.cursor);
        let total = self.table.siblings_count(self.cursor);
        let rows = self.lcd.rows() as usize;
        let Some(target) = window_rank(row as usize, rank, total, rows) else {
            return String::new();
        };
        let Some(mut child) = self.table.eldest(self.table.parent(self.cursor)) else {
            return String::new();
        };
        for _ in 1..target {
            child = self.table.next_sibling(child);
        }
        let marker = if child == self.cursor { CURSOR_MARKER } else { ' ' };
        let label = clip(
            self.table.label(child),
            usize::from(self.lcd.columns().saturating_sub(1)),
        );
        let mut line = String::with_capacity(label.len() + 1);
        line.push(marker);
        line.push_str(label);
        line
    }

    /// Whether the display's rendering of the menu is stale.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Tell the menu the display now shows the current state.
    pub fn mark_redrawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Force a redraw on the next poll.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Tell the menu a host action finished; the menu is displayed again.
    pub fn done(&mut self) {
        self.needs_redraw = true;
    }

    /// Move the cursor back to the first item. The dirty flag is left
    /// untouched.
    pub fn reset(&mut self) {
        self.cursor = self.table.first();
    }
}
