use crate::prelude::*;

use enum_iterator::Sequence;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis in a `[x, y, z]` position.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = MoveError;

    fn try_from(c: char) -> Result<Axis, MoveError> {
        match c {
            'X' | 'x' => Ok(Axis::X),
            'Y' | 'y' => Ok(Axis::Y),
            'Z' | 'z' => Ok(Axis::Z),
            _ => Err(MoveError::InvalidAxis(c)),
        }
    }
}

/// Slice along an axis, by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Layer {
    Negative,
    Middle,
    Positive,
}

impl Layer {
    pub fn coordinate(self) -> i8 {
        match self {
            Layer::Negative => -1,
            Layer::Middle => 0,
            Layer::Positive => 1,
        }
    }
}

impl TryFrom<i32> for Layer {
    type Error = MoveError;

    fn try_from(n: i32) -> Result<Layer, MoveError> {
        match n {
            -1 => Ok(Layer::Negative),
            0 => Ok(Layer::Middle),
            1 => Ok(Layer::Positive),
            _ => Err(MoveError::InvalidLayer(n)),
        }
    }
}

/// `Forward` is the +1 direction of a quarter turn, `Reverse` the -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MoveError;

    fn try_from(n: i32) -> Result<Direction, MoveError> {
        match n {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            _ => Err(MoveError::InvalidDirection(n)),
        }
    }
}

/// One quarter turn of the slice at `layer` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub axis: Axis,
    pub layer: Layer,
    pub direction: Direction,
}

impl Move {
    /// Validates raw `(axis, layer, direction)` input, as delivered by a
    /// gesture handler or a wire format.
    pub fn new(axis: char, layer: i32, direction: i32) -> Result<Move, MoveError> {
        Ok(Move {
            axis: Axis::try_from(axis)?,
            layer: Layer::try_from(layer)?,
            direction: Direction::try_from(direction)?,
        })
    }

    /// All 54 quarter turns.
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Axis>().flat_map(|axis| {
            enum_iterator::all::<Layer>().flat_map(move |layer| {
                enum_iterator::all::<Direction>().map(move |direction| Move {
                    axis,
                    layer,
                    direction,
                })
            })
        })
    }

    pub fn reverse(self) -> Move {
        Move {
            direction: self.direction.reversed(),
            ..self
        }
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let axis = match chars.next() {
            Some(c) => Axis::try_from(c)?,
            None => return Err(anyhow::anyhow!("No axis for move")),
        };

        let rest = chars.as_str();
        let (layer, direction) = match rest.strip_suffix('\'') {
            Some(layer) => (layer, Direction::Reverse),
            None => (rest, Direction::Forward),
        };
        let layer = match layer {
            "-1" => Layer::Negative,
            "0" => Layer::Middle,
            "1" => Layer::Positive,
            "" => return Err(anyhow::anyhow!("No layer for move {}", s)),
            other => return Err(anyhow::anyhow!("Unrecognized layer {:?} in move {}", other, s)),
        };

        Ok(Move {
            axis,
            layer,
            direction,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.axis.letter(), self.layer.coordinate())?;
        if self.direction == Direction::Reverse {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        let axis = match rng.gen_range(0, 3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        };
        let layer = match rng.gen_range(0, 3) {
            0 => Layer::Negative,
            1 => Layer::Middle,
            _ => Layer::Positive,
        };
        let direction = if rng.gen() {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        Move {
            axis,
            layer,
            direction,
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        g.gen()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Move>> {
        quickcheck::empty_shrinker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn parses_forward_and_reverse() {
        assert_eq!(
            "X1".parse::<Move>().unwrap(),
            Move {
                axis: Axis::X,
                layer: Layer::Positive,
                direction: Direction::Forward,
            }
        );
        assert_eq!(
            "z-1'".parse::<Move>().unwrap(),
            Move {
                axis: Axis::Z,
                layer: Layer::Negative,
                direction: Direction::Reverse,
            }
        );
    }

    #[test]
    fn displays_in_notation() {
        let moves = Move::parse_sequence("X1 Y0' Z-1'").unwrap();
        assert_eq!(Move::format_sequence(&moves), "X1 Y0' Z-1'");
    }

    #[test]
    fn rejects_bad_notation() {
        assert!("".parse::<Move>().is_err());
        assert!("W1".parse::<Move>().is_err());
        assert!("X".parse::<Move>().is_err());
        assert!("X'".parse::<Move>().is_err());
        assert!("X2".parse::<Move>().is_err());
        assert!("Xa".parse::<Move>().is_err());
    }

    #[test]
    fn rejects_non_canonical_layers() {
        for s in ["X+1", "X01", "X-0", "Y+0'", "Z 1", "Z1''"] {
            assert!(s.parse::<Move>().is_err(), "{}", s);
        }
    }

    #[test]
    fn notation_round_trips_for_every_move() {
        for m in Move::all() {
            assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Move::new('Q', 0, 1), Err(MoveError::InvalidAxis('Q')));
        assert_eq!(Move::new('X', 2, 1), Err(MoveError::InvalidLayer(2)));
        assert_eq!(Move::new('X', 0, 0), Err(MoveError::InvalidDirection(0)));
        assert!(Move::new('y', -1, -1).is_ok());
    }

    #[test]
    fn all_is_54_distinct_moves() {
        let moves = Move::all().collect::<HashSet<_>>();
        assert_eq!(moves.len(), 54);
    }

    #[test]
    fn random_moves_cover_every_move() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen = (0..5000).map(|_| rng.gen::<Move>()).collect::<HashSet<_>>();
        assert_eq!(seen.len(), 54);
    }

    #[quickcheck]
    fn reverse_twice_is_identity(m: Move) -> bool {
        m.reverse().reverse() == m && m.reverse() != m
    }
}
