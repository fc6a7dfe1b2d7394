//! The eight-point compass.
//!
//! Directions are kept in a fixed cyclic order, clockwise from north:
//! `N, NE, E, SE, S, SW, W, NW`. Rotation by a signed step count walks
//! that cycle, so `rotate(1)` turns 45 degrees clockwise and `rotate(-2)`
//! turns 90 degrees counter-clockwise.

use crate::coord::Coord;
use crate::error::ParseDirectionError;
use std::fmt;
use std::str::FromStr;

/// One of the eight unit steps on a square lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// (0, -1)
    N = 0,
    /// (1, -1)
    NE = 1,
    /// (1, 0)
    E = 2,
    /// (1, 1)
    SE = 3,
    /// (0, 1)
    S = 4,
    /// (-1, 1)
    SW = 5,
    /// (-1, 0)
    W = 6,
    /// (-1, -1)
    NW = 7,
}

impl Direction {
    /// All directions in compass order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` in compass order, wrapping modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    /// Unit offset of one step in this direction.
    pub fn offset(self) -> Coord {
        match self {
            Direction::N => Coord::new(0, -1),
            Direction::NE => Coord::new(1, -1),
            Direction::E => Coord::new(1, 0),
            Direction::SE => Coord::new(1, 1),
            Direction::S => Coord::new(0, 1),
            Direction::SW => Coord::new(-1, 1),
            Direction::W => Coord::new(-1, 0),
            Direction::NW => Coord::new(-1, -1),
        }
    }

    /// Advance `steps` positions around the compass (negative turns
    /// counter-clockwise).
    pub fn rotate(self, steps: i32) -> Self {
        let idx = (self.index() as i32 + steps).rem_euclid(8);
        Self::ALL[idx as usize]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        self.rotate(4)
    }

    /// Short lowercase name: `"n"`, `"ne"`, ... `"nw"`.
    pub fn name(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses the short names produced by [`Direction::name`], ignoring
    /// ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError { name: s.to_owned() })
    }
}

impl std::ops::Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, rhs: Direction) -> Coord {
        self + rhs.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compass_order_is_clockwise_from_north() {
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["n", "ne", "e", "se", "s", "sw", "w", "nw"]);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for d in Direction::ALL {
            let o = d.offset();
            assert_eq!(Coord::new(0, 0).chebyshev(o), 1, "{d} is not a unit step");
        }
        assert_eq!(Direction::N.offset(), Coord::new(0, -1));
        assert_eq!(Direction::SE.offset(), Coord::new(1, 1));
        assert_eq!(Direction::W.offset(), Coord::new(-1, 0));
    }

    #[test]
    fn offsets_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.offset(), b.offset());
            }
        }
    }

    #[test]
    fn rotate_wraps_both_ways() {
        assert_eq!(Direction::NW.rotate(1), Direction::N);
        assert_eq!(Direction::N.rotate(-1), Direction::NW);
        assert_eq!(Direction::S.rotate(-3), Direction::NE);
        assert_eq!(Direction::S.rotate(-2), Direction::E);
        assert_eq!(Direction::E.rotate(1), Direction::SE);
        assert_eq!(Direction::E.rotate(16), Direction::E);
        assert_eq!(Direction::E.rotate(-17), Direction::NE);
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::N.opposite(), Direction::S);
        assert_eq!(Direction::NE.opposite(), Direction::SW);
        assert_eq!(Direction::W.opposite(), Direction::E);
    }

    #[test]
    fn parse_accepts_names_case_insensitively() {
        assert_eq!("ne".parse::<Direction>(), Ok(Direction::NE));
        assert_eq!("SW".parse::<Direction>(), Ok(Direction::SW));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::W));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err.name, "north");
        assert!("".parse::<Direction>().is_err());
        assert!("nne".parse::<Direction>().is_err());
    }

    #[test]
    fn coord_plus_direction() {
        assert_eq!(Coord::new(2, 2) + Direction::NW, Coord::new(1, 1));
    }

    proptest! {
        #[test]
        fn rotate_is_additive(i in 0usize..8, a in -20i32..20, b in -20i32..20) {
            let d = Direction::from_index(i);
            prop_assert_eq!(d.rotate(a).rotate(b), d.rotate(a + b));
        }

        #[test]
        fn name_round_trips(i in 0usize..8) {
            let d = Direction::from_index(i);
            prop_assert_eq!(d.name().parse::<Direction>(), Ok(d));
        }

        #[test]
        fn opposite_offsets_cancel(i in 0usize..8) {
            let d = Direction::from_index(i);
            prop_assert_eq!(d.offset() + d.opposite().offset(), Coord::new(0, 0));
        }
    }
}
