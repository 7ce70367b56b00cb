//! Sparse character layer.
//!
//! A layer maps grid positions to printable characters and carries a color
//! id. Color changes are broadcast to subscribers, so views can redraw
//! without polling.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tokio::sync::broadcast;

/// A cell position on the character grid.
///
/// Ordered row-major: first by `y`, then by `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A sparse grid of characters sharing one color.
#[derive(Debug)]
pub struct Layer {
    characters: BTreeMap<Position, char>,
    color: u32,
    color_changed: broadcast::Sender<u32>,
}

impl Layer {
    pub fn new(color: u32) -> Self {
        let (color_changed, _) = broadcast::channel(16);
        Self {
            characters: BTreeMap::new(),
            color,
            color_changed,
        }
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Change the color id.
    ///
    /// Subscribers are notified only when the value actually changes.
    /// Returns whether it did.
    pub fn set_color(&mut self, color: u32) -> bool {
        if color == self.color {
            return false;
        }
        self.color = color;
        // No subscribers is fine
        let _ = self.color_changed.send(color);
        tracing::trace!(color, "Layer color changed");
        true
    }

    /// Receive every subsequent color change.
    pub fn subscribe(&self) -> broadcast::Receiver<u32> {
        self.color_changed.subscribe()
    }

    /// Place a character. Space and control characters clear the cell.
    pub fn set_char(&mut self, pos: impl Into<Position>, ch: char) {
        let pos = pos.into();
        if ch <= ' ' {
            self.characters.remove(&pos);
        } else {
            self.characters.insert(pos, ch);
        }
    }

    pub fn remove_char(&mut self, pos: impl Into<Position>) {
        self.characters.remove(&pos.into());
    }

    /// The character at `pos`, or a space for an empty cell.
    pub fn char_at(&self, pos: impl Into<Position>) -> char {
        self.characters.get(&pos.into()).copied().unwrap_or(' ')
    }

    /// Occupied cells in row-major order.
    pub fn characters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.characters.iter().map(|(pos, ch)| (*pos, *ch))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl fmt::Display for Layer {
    /// Render occupied cells as text, with no trailing padding.
    ///
    /// A cursor starts at the origin. Moving down a row emits newlines and
    /// resets the cursor column to 0; cells are then separated by one space
    /// per skipped column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = Position::default();
        for (pos, ch) in self.characters() {
            if pos.y != cursor.y {
                // Rows ascend, so only the first cell can sit above the origin
                for _ in cursor.y..pos.y {
                    f.write_str("\n")?;
                }
                cursor = Position::new(0, pos.y);
            }
            for _ in (cursor.x + 1)..pos.x {
                f.write_str(" ")?;
            }
            write!(f, "{ch}")?;
            cursor.x = pos.x;
        }
        Ok(())
    }
}
