use crate::prelude::*;

mod cubelet;
mod face;
mod net;
mod solved;
mod state;

pub use cubelet::*;
pub use face::*;
pub use state::*;

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;
    fn is_solved(&self) -> bool;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert_eq!(CubeState::solved(), CubeState::solved());
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(
            CubeState::solved().apply("Z0".parse().unwrap()),
            CubeState::solved()
        );
    }

    #[test]
    fn apply_all_matches_sequential_apply() {
        let moves = Move::parse_sequence("X1 Y-1' Z0").unwrap();
        let mut cube = CubeState::solved();
        for m in &moves {
            cube = cube.apply(*m);
        }
        assert_eq!(CubeState::solved().apply_all(moves), cube);
    }
}
