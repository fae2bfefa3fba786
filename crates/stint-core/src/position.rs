//! Screen quadrant positions
//!
//! The four-clock layout addresses its timers by a closed set of quadrant
//! labels. Each label maps to exactly one slot of a `[_; 4]` array.

/// One of the four fixed screen quadrants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// All positions in slot order
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Parse a position label from the color table
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "top-left" => Some(Position::TopLeft),
            "top-right" => Some(Position::TopRight),
            "bottom-left" => Some(Position::BottomLeft),
            "bottom-right" => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// The label this position carries in the color table
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Stable slot index into `[_; 4]` arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopRight => 1,
            Position::BottomLeft => 2,
            Position::BottomRight => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for position in Position::ALL {
            assert_eq!(Position::from_label(position.label()), Some(position));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Position::from_label("center"), None);
        assert_eq!(Position::from_label("TOP-LEFT"), None);
        assert_eq!(Position::from_label(""), None);
    }

    #[test]
    fn test_index_covers_all_slots() {
        let mut seen = [false; 4];
        for position in Position::ALL {
            seen[position.index()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
