//! Constants used in the Xiangqi engine.

use crate::square::Square;
use once_cell::sync::Lazy;

pub const FILES: usize = 9;
pub const RANKS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    Elephant,
    Advisor,
    General,
    Cannon,
    Soldier,
}

impl Color {
    /// Get the opponent of this color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Index into color-keyed tables (0 for Red, 1 for Black).
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Row step of a forward move, in internal row units.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Whether `row` (0-indexed) lies on the far side of the river for this color.
    pub fn across_river(self, row: u8) -> bool {
        match self {
            Color::Red => row >= 5,
            Color::Black => row <= 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Elephant,
        PieceKind::Advisor,
        PieceKind::General,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Letter used by the text board; uppercase for Red, lowercase for Black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'k',
            PieceKind::Elephant => 'e',
            PieceKind::Advisor => 'a',
            PieceKind::General => 'g',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 's',
        };
        match color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let kind = match c.to_ascii_lowercase() {
            'r' => PieceKind::Rook,
            'k' => PieceKind::Knight,
            'e' => PieceKind::Elephant,
            'a' => PieceKind::Advisor,
            'g' => PieceKind::General,
            'c' => PieceKind::Cannon,
            's' => PieceKind::Soldier,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Black };
        Some((color, kind))
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Elephant => "elephant",
            PieceKind::Advisor => "advisor",
            PieceKind::General => "general",
            PieceKind::Cannon => "cannon",
            PieceKind::Soldier => "soldier",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed set of board points, stored as a column-major occupancy mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSet([[bool; RANKS]; FILES]);

impl PointSet {
    fn from_coords(coords: &[&str]) -> Self {
        let mut mask = [[false; RANKS]; FILES];
        for coord in coords {
            if let Ok(sq) = coord.parse::<Square>() {
                mask[sq.col() as usize][sq.row() as usize] = true;
            }
        }
        PointSet(mask)
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.0[sq.col() as usize][sq.row() as usize]
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().filter(|&&p| p).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Points each piece with a confined range may stand on, indexed by `Color::index`.
pub struct RuleTables {
    pub palace: [PointSet; 2],
    pub advisor: [PointSet; 2],
    pub elephant: [PointSet; 2],
}

impl RuleTables {
    fn new() -> Self {
        Self {
            palace: [
                PointSet::from_coords(&["d1", "d2", "d3", "e1", "e2", "e3", "f1", "f2", "f3"]),
                PointSet::from_coords(&["d8", "d9", "d10", "e8", "e9", "e10", "f8", "f9", "f10"]),
            ],
            advisor: [
                PointSet::from_coords(&["d1", "d3", "e2", "f1", "f3"]),
                PointSet::from_coords(&["d10", "d8", "e9", "f10", "f8"]),
            ],
            elephant: [
                PointSet::from_coords(&["c1", "a3", "c5", "e3", "g1", "i3", "g5"]),
                PointSet::from_coords(&["c10", "a8", "c6", "e8", "g10", "i8", "g6"]),
            ],
        }
    }
}

pub static RULE_TABLES: Lazy<RuleTables> = Lazy::new(RuleTables::new);

/// The standard opening layout, Red pieces first.
pub const STANDARD_LAYOUT: [(Color, PieceKind, &str); 32] = [
    (Color::Red, PieceKind::Rook, "a1"),
    (Color::Red, PieceKind::Rook, "i1"),
    (Color::Red, PieceKind::Knight, "b1"),
    (Color::Red, PieceKind::Knight, "h1"),
    (Color::Red, PieceKind::Elephant, "c1"),
    (Color::Red, PieceKind::Elephant, "g1"),
    (Color::Red, PieceKind::Advisor, "d1"),
    (Color::Red, PieceKind::Advisor, "f1"),
    (Color::Red, PieceKind::General, "e1"),
    (Color::Red, PieceKind::Cannon, "b3"),
    (Color::Red, PieceKind::Cannon, "h3"),
    (Color::Red, PieceKind::Soldier, "a4"),
    (Color::Red, PieceKind::Soldier, "c4"),
    (Color::Red, PieceKind::Soldier, "e4"),
    (Color::Red, PieceKind::Soldier, "g4"),
    (Color::Red, PieceKind::Soldier, "i4"),
    (Color::Black, PieceKind::Rook, "a10"),
    (Color::Black, PieceKind::Rook, "i10"),
    (Color::Black, PieceKind::Knight, "b10"),
    (Color::Black, PieceKind::Knight, "h10"),
    (Color::Black, PieceKind::Elephant, "c10"),
    (Color::Black, PieceKind::Elephant, "g10"),
    (Color::Black, PieceKind::Advisor, "d10"),
    (Color::Black, PieceKind::Advisor, "f10"),
    (Color::Black, PieceKind::General, "e10"),
    (Color::Black, PieceKind::Cannon, "b8"),
    (Color::Black, PieceKind::Cannon, "h8"),
    (Color::Black, PieceKind::Soldier, "a7"),
    (Color::Black, PieceKind::Soldier, "c7"),
    (Color::Black, PieceKind::Soldier, "e7"),
    (Color::Black, PieceKind::Soldier, "g7"),
    (Color::Black, PieceKind::Soldier, "i7"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_tables_have_expected_sizes() {
        for color in [Color::Red, Color::Black] {
            assert_eq!(RULE_TABLES.palace[color.index()].len(), 9);
            assert_eq!(RULE_TABLES.advisor[color.index()].len(), 5);
            assert_eq!(RULE_TABLES.elephant[color.index()].len(), 7);
        }
    }

    #[test]
    fn piece_chars_round_trip_color() {
        assert_eq!(PieceKind::from_char('G'), Some((Color::Red, PieceKind::General)));
        assert_eq!(PieceKind::from_char('s'), Some((Color::Black, PieceKind::Soldier)));
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::Cannon.to_char(Color::Red), 'C');
    }

    #[test]
    fn river_thresholds() {
        assert!(!Color::Red.across_river(4));
        assert!(Color::Red.across_river(5));
        assert!(Color::Black.across_river(4));
        assert!(!Color::Black.across_river(5));
    }
}
