use crate::prelude::*;

use enum_iterator::Sequence;

/// Outward direction of a cubelet side, relative to the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    pub fn axis(self) -> Axis {
        match self {
            Face::PosX | Face::NegX => Axis::X,
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// The coordinate a cubelet needs on [`Face::axis`] to expose this face.
    pub fn sign(self) -> i8 {
        match self {
            Face::PosX | Face::PosY | Face::PosZ => 1,
            Face::NegX | Face::NegY | Face::NegZ => -1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Face::PosX => 0,
            Face::NegX => 1,
            Face::PosY => 2,
            Face::NegY => 3,
            Face::PosZ => 4,
            Face::NegZ => 5,
        }
    }

    /// Where this face points after a quarter turn about `axis`.
    ///
    /// Forward turns follow the 4-cycles `+Y→+Z→-Y→-Z` (X),
    /// `+Z→+X→-Z→-X` (Y) and `+X→+Y→-X→-Y` (Z).
    pub fn turned(self, axis: Axis, direction: Direction) -> Face {
        use Face::*;

        if self.axis() == axis {
            return self;
        }

        let cycle = match axis {
            Axis::X => [PosY, PosZ, NegY, NegZ],
            Axis::Y => [PosZ, PosX, NegZ, NegX],
            Axis::Z => [PosX, PosY, NegX, NegY],
        };
        let step = match direction {
            Direction::Forward => 1,
            Direction::Reverse => 3,
        };
        let i = cycle.iter().position(|&f| f == self).unwrap_or(0);
        cycle[(i + step) % 4]
    }

    /// Color this face carries on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Face::PosX => Color::Red,
            Face::NegX => Color::Orange,
            Face::PosY => Color::White,
            Face::NegY => Color::Yellow,
            Face::PosZ => Color::Green,
            Face::NegZ => Color::Blue,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = if self.sign() > 0 { '+' } else { '-' };
        write!(f, "{}{}", sign, self.axis().letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Color {
    Red,
    Orange,
    White,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Red => "#E63946",
            Color::Orange => "#F4A261",
            Color::White => "#F1FAEE",
            Color::Yellow => "#FFD166",
            Color::Green => "#06D6A0",
            Color::Blue => "#118AB2",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(face: Face) -> Position {
        let mut p = [0; 3];
        p[face.axis().index()] = face.sign();
        p
    }

    #[test]
    fn turning_agrees_with_position_rotation() {
        for axis in enum_iterator::all::<Axis>() {
            for direction in enum_iterator::all::<Direction>() {
                for face in enum_iterator::all::<Face>() {
                    assert_eq!(
                        normal(face.turned(axis, direction)),
                        rotate_position(normal(face), axis, direction),
                        "{} turned about {:?} {:?}",
                        face,
                        axis,
                        direction,
                    );
                }
            }
        }
    }

    #[test]
    fn four_turns_return_home() {
        for face in enum_iterator::all::<Face>() {
            let mut f = face;
            for _ in 0..4 {
                f = f.turned(Axis::Y, Direction::Forward);
            }
            assert_eq!(f, face);
        }
    }

    #[test]
    fn home_colors_are_distinct() {
        let mut colors = enum_iterator::all::<Face>()
            .map(Face::home_color)
            .collect::<Vec<_>>();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }
}
