use crate::prelude::*;

/// Position of the cubelet drawn at `(row, col)` of `face` in the unfolded
/// net, reading each face as seen from outside the cube.
fn net_position(face: Face, row: i8, col: i8) -> Position {
    match face {
        Face::PosY => [col - 1, 1, row - 1],
        Face::NegY => [col - 1, -1, 1 - row],
        Face::PosZ => [col - 1, 1 - row, 1],
        Face::NegZ => [1 - col, 1 - row, -1],
        Face::PosX => [1, 1 - row, 1 - col],
        Face::NegX => [-1, 1 - row, col - 1],
    }
}

struct Row<'c> {
    cube: &'c CubeState,
    face: Face,
    row: i8,
}

impl std::fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for col in 0..3 {
            match self
                .cube
                .facelet(self.face, net_position(self.face, self.row, col))
            {
                Some(color) => write!(f, "{}", color)?,
                None => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let row = |face: Face, row: i8| Row {
            cube: self,
            face,
            row,
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::PosY, r))?;
        }

        let middle = [Face::NegX, Face::PosZ, Face::PosX, Face::NegZ];
        for r in 0..3 {
            let line = middle
                .iter()
                .map(|&face| row(face, r).to_string())
                .collect::<Vec<_>>();
            writeln!(f, "{}", line.join(" "))?;
        }

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::NegY, r))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_net() {
        let expected = "    WWW\n    WWW\n    WWW\n\
                        OOO GGG RRR BBB\n\
                        OOO GGG RRR BBB\n\
                        OOO GGG RRR BBB\n\
                        \x20   YYY\n    YYY\n    YYY\n";
        assert_eq!(CubeState::solved().to_string(), expected);
    }

    #[test]
    fn net_positions_lie_on_their_face() {
        for face in enum_iterator::all::<Face>() {
            for row in 0..3 {
                for col in 0..3 {
                    let p = net_position(face, row, col);
                    assert_eq!(p[face.axis().index()], face.sign());
                }
            }
        }
    }

    #[test]
    fn front_turn_shows_on_the_net() {
        // Z1 turns the front layer, lifting the right face's front column
        // onto the front row of the up face.
        let net = cube_with_moves("Z1").to_string();
        let lines = net.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "    WWW");
        assert_eq!(lines[2], "    RRR");
        assert_ne!(lines[3], "OOO GGG RRR BBB");
        assert!(net.chars().all(|c| c != '?'));
    }
}
