use crate::prelude::*;

use rand::Rng;
use std::collections::VecDeque;

/// Pause between replayed moves when a solve is animated.
pub const DEFAULT_SOLVE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    Applied(Move),
    /// No replay is pending; the session accepts input again.
    Finished,
}

/// One puzzle: the current cube, its move log and undo/redo stacks.
///
/// Every mutation goes through the rotation engine and is committed to the
/// history. While a solve replay is pending the session is input locked and
/// rejects every other mutation without touching any state.
#[derive(Debug, Clone)]
pub struct Session {
    state: CubeState,
    history: History,
    pending_solve: Option<VecDeque<Move>>,
    move_count: usize,
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            state: CubeState::solved(),
            history: History::new(),
            pending_solve: None,
            move_count: 0,
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Moves made through [`Session::apply_move`] since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn reset_move_count(&mut self) {
        self.move_count = 0;
    }

    /// The moves a solve would reverse.
    pub fn history(&self) -> &[Move] {
        self.history.moves()
    }

    pub fn input_locked(&self) -> bool {
        self.pending_solve.is_some()
    }

    fn ensure_unlocked(&self, action: &str) -> Result<(), SessionError> {
        if self.input_locked() {
            log::warn!("Rejected {} while a solve is replaying", action);
            return Err(SessionError::InputLocked);
        }
        Ok(())
    }

    fn commit(&mut self, move_: Move) {
        let next = self.state.rotated(move_);
        debug_assert!(next.validate().is_ok(), "{} broke the cube", move_);

        let before = std::mem::replace(&mut self.state, next);
        self.history.record(before, move_);
        log::debug!("Applied {}", move_);
    }

    /// Applies a user move and counts it.
    pub fn apply_move(&mut self, move_: Move) -> Result<(), SessionError> {
        self.ensure_unlocked("move")?;
        self.commit(move_);
        self.move_count += 1;
        Ok(())
    }

    pub fn scramble(&mut self, moves: usize) -> Result<Vec<Move>, SessionError> {
        self.scramble_with(moves, &mut rand::thread_rng())
    }

    /// Commits `moves` uniformly random quarter turns. Cancelling or repeated
    /// moves are kept as drawn.
    pub fn scramble_with<R: Rng + ?Sized>(
        &mut self,
        moves: usize,
        rng: &mut R,
    ) -> Result<Vec<Move>, SessionError> {
        self.ensure_unlocked("scramble")?;

        let scramble = (0..moves).map(|_| rng.gen::<Move>()).collect::<Vec<_>>();
        for &m in &scramble {
            self.commit(m);
        }
        log::info!("Scrambled with {} moves", scramble.len());
        Ok(scramble)
    }

    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, SessionError> {
        self.ensure_unlocked("undo")?;
        Ok(match self.history.undo(&mut self.state) {
            Some(m) => {
                log::debug!("Undid {}", m);
                true
            }
            None => false,
        })
    }

    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, SessionError> {
        self.ensure_unlocked("redo")?;
        Ok(match self.history.redo(&mut self.state) {
            Some(m) => {
                log::debug!("Redid {}", m);
                true
            }
            None => false,
        })
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.ensure_unlocked("reset")?;
        self.state = CubeState::solved();
        self.history.clear();
        self.move_count = 0;
        log::info!("Reset to solved");
        Ok(())
    }

    /// Makes the current cube the new starting point: the move log and both
    /// snapshot stacks are cleared, the cube and move counter are kept.
    pub fn mark_baseline(&mut self) -> Result<(), SessionError> {
        self.ensure_unlocked("baseline")?;
        self.history.clear();
        log::info!("Marked baseline, solved: {}", self.is_solved());
        Ok(())
    }

    /// Queues the reversed move log for replay and locks input. Returns the
    /// number of moves that will be replayed; with none, the solve completes
    /// immediately and input stays unlocked.
    pub fn begin_solve(&mut self) -> Result<usize, SessionError> {
        self.ensure_unlocked("solve")?;

        let plan = self
            .history
            .moves()
            .iter()
            .rev()
            .map(|m| m.reverse())
            .collect::<VecDeque<_>>();
        let len = plan.len();
        log::info!("Solving by replaying {} moves", len);

        if plan.is_empty() {
            self.finish_solve();
        } else {
            self.pending_solve = Some(plan);
        }
        Ok(len)
    }

    /// Commits the next replayed move. The step that commits the last move
    /// also completes the solve: the log is cleared and input unlocked.
    pub fn solve_step(&mut self) -> SolveStep {
        let next = self.pending_solve.as_mut().and_then(|plan| plan.pop_front());
        let move_ = match next {
            Some(m) => m,
            None => return SolveStep::Finished,
        };

        self.commit(move_);
        if self.pending_solve.as_ref().map_or(true, |plan| plan.is_empty()) {
            self.finish_solve();
        }
        SolveStep::Applied(move_)
    }

    /// Runs a whole solve without pauses and returns the replayed moves.
    pub fn solve_now(&mut self) -> Result<Vec<Move>, SessionError> {
        self.begin_solve()?;
        let mut replayed = Vec::new();
        while let SolveStep::Applied(m) = self.solve_step() {
            replayed.push(m);
        }
        Ok(replayed)
    }

    fn finish_solve(&mut self) {
        self.pending_solve = None;
        self.history.clear_moves();
        log::info!("Solve finished, solved: {}", self.is_solved());
    }
}
