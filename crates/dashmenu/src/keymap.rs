#![forbid(unsafe_code)]

//! Key-to-direction mapping for keypad front ends.
//!
//! A keypad driver reports either integers or characters; the menu only
//! understands the four logical directions. [`KeyBindings`] is the thin
//! translation between the two, one instance per key type.

/// Logical navigation direction produced by a mapped key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for vertical directions (sibling moves).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns true for horizontal directions (level moves).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One key value per direction, for keypads reporting values of type `K`.
///
/// An integer-keyed and a character-keyed mapping may be installed on the
/// same menu; each front end consults only its own. If the same value is
/// bound to several directions, the first match in Up, Down, Left, Right
/// order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings<K> {
    up: K,
    down: K,
    left: K,
    right: K,
}

impl<K: Copy + Eq> KeyBindings<K> {
    /// Create a mapping from the four key values.
    #[must_use]
    pub const fn new(up: K, down: K, left: K, right: K) -> Self {
        Self { up, down, left, right }
    }

    /// Direction bound to `key`, or `None` for unmapped keys.
    #[must_use]
    pub fn direction_of(&self, key: K) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_keys_map_to_directions() {
        let keys = KeyBindings::new(8, 2, 4, 6);
        assert_eq!(keys.direction_of(8), Some(Direction::Up));
        assert_eq!(keys.direction_of(2), Some(Direction::Down));
        assert_eq!(keys.direction_of(4), Some(Direction::Left));
        assert_eq!(keys.direction_of(6), Some(Direction::Right));
        assert_eq!(keys.direction_of(5), None);
    }

    #[test]
    fn char_keys_map_to_directions() {
        let keys = KeyBindings::new('w', 's', 'a', 'd');
        assert_eq!(keys.direction_of('w'), Some(Direction::Up));
        assert_eq!(keys.direction_of('d'), Some(Direction::Right));
        assert_eq!(keys.direction_of('x'), None);
    }

    #[test]
    fn duplicate_bindings_resolve_in_declaration_order() {
        let keys = KeyBindings::new(1, 1, 2, 2);
        assert_eq!(keys.direction_of(1), Some(Direction::Up));
        assert_eq!(keys.direction_of(2), Some(Direction::Left));
    }

    #[test]
    fn opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }
}
