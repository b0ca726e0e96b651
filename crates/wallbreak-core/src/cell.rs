//! The [`Cell`] type: what occupies one square of a maze.

use std::fmt;

/// Identifier shared by the two cells of a portal pair.
///
/// In the text layout ids 0–25 are written as the letters `a`–`z`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalId(pub u8);

impl PortalId {
    /// Number of distinct ids the text layout can express.
    pub const COUNT: u8 = 26;

    /// Map a layout letter (`a`–`z`) to its id.
    pub fn from_letter(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self(ch as u8 - b'a'))
        } else {
            None
        }
    }

    /// The layout letter for this id, or `None` past `z`.
    pub fn letter(self) -> Option<char> {
        if self.0 < Self::COUNT {
            Some((b'a' + self.0) as char)
        } else {
            None
        }
    }
}

impl fmt::Display for PortalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// A maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
    Portal(PortalId),
}

impl Cell {
    /// Wall cells can only be entered by spending a break charge.
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    #[inline]
    pub fn is_portal(self) -> bool {
        matches!(self, Cell::Portal(_))
    }

    #[inline]
    pub fn portal_id(self) -> Option<PortalId> {
        match self {
            Cell::Portal(id) => Some(id),
            _ => None,
        }
    }

    /// Decode a layout character: `#` wall, `.` empty, `S` start, `G` goal,
    /// `a`–`z` portal.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            _ => PortalId::from_letter(ch).map(Cell::Portal),
        }
    }

    /// Encode as a layout character. Portals beyond `z` render as `?`.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Portal(id) => id.letter().unwrap_or('?'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_chars_round_trip() {
        for ch in "#.SGaz".chars() {
            let cell = Cell::from_char(ch).unwrap();
            assert_eq!(cell.to_char(), ch);
        }
    }

    #[test]
    fn unknown_chars_rejected() {
        assert_eq!(Cell::from_char('X'), None);
        assert_eq!(Cell::from_char(' '), None);
        assert_eq!(Cell::from_char('1'), None);
    }

    #[test]
    fn portal_letters() {
        assert_eq!(Cell::from_char('c'), Some(Cell::Portal(PortalId(2))));
        assert_eq!(PortalId(25).letter(), Some('z'));
        assert_eq!(PortalId(26).letter(), None);
        assert_eq!(PortalId(30).to_string(), "#30");
        assert_eq!(Cell::Portal(PortalId(40)).to_char(), '?');
    }

    #[test]
    fn predicates() {
        assert!(Cell::Wall.is_wall());
        assert!(!Cell::Start.is_wall());
        assert!(Cell::Portal(PortalId(0)).is_portal());
        assert_eq!(Cell::Goal.portal_id(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
