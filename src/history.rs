use crate::prelude::*;

/// A state together with the move that leads away from it (undo stack) or
/// into it (redo stack).
#[derive(Debug, Clone)]
struct Snapshot {
    state: CubeState,
    move_: Move,
}

/// Move log plus linear undo/redo snapshot stacks.
///
/// The move log always replays the cube from its last baseline (reset or
/// completed solve) to the current state: undoing `m` drops `m` from the end
/// of the log when it is there and appends `m'` otherwise, and redo mirrors
/// that. Reversing the log is therefore always a valid solve.
#[derive(Debug, Clone, Default)]
pub struct History {
    moves: Vec<Move>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Records `move_` as applied to `before`. Clears the redo stack.
    pub fn record(&mut self, before: CubeState, move_: Move) {
        self.moves.push(move_);
        self.undo.push(Snapshot {
            state: before,
            move_,
        });
        self.redo.clear();
    }

    /// Swaps `current` for the most recent undo snapshot. Returns the move
    /// that was taken back, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &mut CubeState) -> Option<Move> {
        let Snapshot { state, move_ } = self.undo.pop()?;
        let after = std::mem::replace(current, state);
        self.redo.push(Snapshot {
            state: after,
            move_,
        });
        self.log_effective(move_.reverse());
        Some(move_)
    }

    /// Swaps `current` for the most recent redo snapshot. Returns the move
    /// that was replayed, or `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &mut CubeState) -> Option<Move> {
        let Snapshot { state, move_ } = self.redo.pop()?;
        let before = std::mem::replace(current, state);
        self.undo.push(Snapshot {
            state: before,
            move_,
        });
        self.log_effective(move_);
        Some(move_)
    }

    /// Forgets the move log, keeping both snapshot stacks.
    pub fn clear_moves(&mut self) {
        self.moves.clear();
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.undo.clear();
        self.redo.clear();
    }

    fn log_effective(&mut self, move_: Move) {
        if self.moves.last() == Some(&move_.reverse()) {
            self.moves.pop();
        } else {
            self.moves.push(move_);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &str) -> (History, CubeState) {
        let mut history = History::new();
        let mut cube = CubeState::solved();
        for m in Move::parse_sequence(moves).unwrap() {
            let next = cube.rotated(m);
            history.record(std::mem::replace(&mut cube, next), m);
        }
        (history, cube)
    }

    fn replay(history: &History) -> CubeState {
        CubeState::solved().apply_all(history.moves().iter().copied())
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut history = History::new();
        let mut cube = CubeState::solved();
        assert_eq!(history.undo(&mut cube), None);
        assert_eq!(history.redo(&mut cube), None);
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn undo_then_redo() {
        let (mut history, mut cube) = played("X1 Y0 Z-1'");
        let end = cube.clone();

        assert_eq!(history.undo(&mut cube), Some("Z-1'".parse().unwrap()));
        assert_eq!(cube, cube_with_moves("X1 Y0"));
        assert!(history.can_redo());

        assert_eq!(history.redo(&mut cube), Some("Z-1'".parse().unwrap()));
        assert_eq!(cube, end);
        assert!(!history.can_redo());
    }

    #[test]
    fn new_move_clears_redo() {
        let (mut history, mut cube) = played("X1 Y0");
        history.undo(&mut cube);
        assert_eq!(history.redo_depth(), 1);

        let next = cube.rotated("Z1".parse().unwrap());
        history.record(std::mem::replace(&mut cube, next), "Z1".parse().unwrap());
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn undo_trims_the_move_log() {
        let (mut history, mut cube) = played("X1 Y0 Z-1'");
        history.undo(&mut cube);
        assert_eq!(Move::format_sequence(history.moves()), "X1 Y0");
        history.redo(&mut cube);
        assert_eq!(Move::format_sequence(history.moves()), "X1 Y0 Z-1'");
    }

    #[test]
    fn undo_past_a_cleared_log_appends_inverse() {
        let (mut history, mut cube) = played("X1 Y0");
        history.clear_moves();
        history.undo(&mut cube);
        assert_eq!(Move::format_sequence(history.moves()), "Y0'");
    }

    #[test]
    fn clear_drops_everything() {
        let (mut history, mut cube) = played("X1 Y0");
        history.undo(&mut cube);
        history.clear();
        assert!(history.moves().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[quickcheck]
    fn undo_redo_round_trip(moves: Vec<Move>) -> bool {
        let mut history = History::new();
        let mut cube = CubeState::solved();
        for &m in &moves {
            let next = cube.rotated(m);
            history.record(std::mem::replace(&mut cube, next), m);
        }
        let end = cube.clone();

        for _ in &moves {
            history.undo(&mut cube);
        }
        let back_at_start = cube == CubeState::solved() && history.moves().is_empty();

        for _ in &moves {
            history.redo(&mut cube);
        }
        back_at_start && cube == end
    }

    #[quickcheck]
    fn log_replays_to_current_state(moves: Vec<Move>, undos: Vec<bool>) -> bool {
        let mut history = History::new();
        let mut cube = CubeState::solved();
        for &m in &moves {
            let next = cube.rotated(m);
            history.record(std::mem::replace(&mut cube, next), m);
        }
        for undo in undos {
            if undo {
                history.undo(&mut cube);
            } else {
                history.redo(&mut cube);
            }
        }
        replay(&history) == cube
    }
}
