//! Remappable direction bindings.
//!
//! The engine only ever sees canonical [`Direction`] values; which physical
//! keys produce them is decided here, from command-line flags. Mirrors the
//! rebinding rules of the original game: all four keys must be unique, and
//! the reserved quit/restart keys cannot be taken.

use std::fmt;
use tilemerge_core::Direction;

/// Keys reserved for session control, never available for rebinding.
const RESERVED: [char; 2] = ['q', 'r'];

#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    up: char,
    down: char,
    left: char,
    right: char,
}

impl KeyBindings {
    /// Validate and build a binding set. Comparison is case-insensitive.
    pub fn new(up: char, down: char, left: char, right: char) -> Result<Self, String> {
        let keys = [
            up.to_ascii_lowercase(),
            down.to_ascii_lowercase(),
            left.to_ascii_lowercase(),
            right.to_ascii_lowercase(),
        ];

        for key in keys {
            if RESERVED.contains(&key) {
                return Err(format!("key '{}' is reserved", key));
            }
        }
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                if keys[i] == keys[j] {
                    return Err("all direction keys must be unique".to_string());
                }
            }
        }

        Ok(KeyBindings {
            up: keys[0],
            down: keys[1],
            left: keys[2],
            right: keys[3],
        })
    }

    /// The direction bound to `key`, if any.
    pub fn direction_for(&self, key: char) -> Option<Direction> {
        let key = key.to_ascii_lowercase();
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

impl fmt::Display for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.up.to_ascii_uppercase(),
            self.left.to_ascii_uppercase(),
            self.down.to_ascii_uppercase(),
            self.right.to_ascii_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wasd_bindings() {
        let bindings = KeyBindings::new('w', 's', 'a', 'd').unwrap();
        assert_eq!(bindings.direction_for('w'), Some(Direction::Up));
        assert_eq!(bindings.direction_for('A'), Some(Direction::Left));
        assert_eq!(bindings.direction_for('s'), Some(Direction::Down));
        assert_eq!(bindings.direction_for('D'), Some(Direction::Right));
        assert_eq!(bindings.direction_for('x'), None);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        assert!(KeyBindings::new('w', 'w', 'a', 'd').is_err());
        assert!(KeyBindings::new('i', 'K', 'j', 'k').is_err());
    }

    #[test]
    fn test_reserved_keys_rejected() {
        assert!(KeyBindings::new('q', 's', 'a', 'd').is_err());
        assert!(KeyBindings::new('w', 'R', 'a', 'd').is_err());
    }

    #[test]
    fn test_remapped_bindings() {
        let bindings = KeyBindings::new('i', 'k', 'j', 'l').unwrap();
        assert_eq!(bindings.direction_for('j'), Some(Direction::Left));
        assert_eq!(bindings.direction_for('w'), None);
    }
}
