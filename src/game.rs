use crate::prelude::*;

use enum_iterator::Sequence;
use rand::Rng;
use std::time::Instant;

pub const TIME_ATTACK_LIMIT: Duration = Duration::from_secs(120);
pub const TIME_ATTACK_SCRAMBLE: usize = 20;
/// Used when the daily challenge store has no scramble length.
pub const DAILY_DEFAULT_SCRAMBLE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn scramble_moves(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 15,
            Difficulty::Hard => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic(Difficulty),
    /// Solve a fixed scramble within [`TIME_ATTACK_LIMIT`].
    TimeAttack,
    /// Scramble length comes from the daily challenge store.
    Daily { scramble_moves: usize },
}

impl GameMode {
    pub fn scramble_moves(&self) -> usize {
        match self {
            GameMode::Classic(difficulty) => difficulty.scramble_moves(),
            GameMode::TimeAttack => TIME_ATTACK_SCRAMBLE,
            GameMode::Daily { scramble_moves } => *scramble_moves,
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        match self {
            GameMode::TimeAttack => Some(TIME_ATTACK_LIMIT),
            GameMode::Classic(_) | GameMode::Daily { .. } => None,
        }
    }
}

impl core::str::FromStr for GameMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<GameMode> {
        let mode = match s.to_ascii_lowercase().as_str() {
            "easy" => GameMode::Classic(Difficulty::Easy),
            "medium" => GameMode::Classic(Difficulty::Medium),
            "hard" => GameMode::Classic(Difficulty::Hard),
            "time-attack" => GameMode::TimeAttack,
            "daily" => GameMode::Daily {
                scramble_moves: DAILY_DEFAULT_SCRAMBLE,
            },
            other => match other.strip_prefix("daily:") {
                Some(n) => GameMode::Daily {
                    scramble_moves: n
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Bad daily scramble length {:?}", n))?,
                },
                None => return Err(anyhow::anyhow!("Unrecognized game mode {}", s)),
            },
        };
        Ok(mode)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GameMode::Classic(difficulty) => write!(f, "Classic ({:?})", difficulty),
            GameMode::TimeAttack => write!(f, "Time Attack"),
            GameMode::Daily { scramble_moves } => write!(f, "Daily ({} moves)", scramble_moves),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Completed,
    Failed,
}

/// What the persistence collaborator stores when a game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub mode: GameMode,
    pub elapsed: Duration,
    pub moves: usize,
    pub solved: bool,
    pub status: GameStatus,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {:?} in {}s with {} moves",
            self.mode,
            self.status,
            self.elapsed.as_secs(),
            self.moves
        )
    }
}

/// A scrambled session plus the clock and rules of one game mode.
#[derive(Debug, Clone)]
pub struct Game {
    mode: GameMode,
    session: Session,
    scramble: Vec<Move>,
    started: Instant,
    solved_after: Option<Duration>,
}

impl Game {
    pub fn start(mode: GameMode) -> Result<Game, SessionError> {
        Game::start_with(mode, &mut rand::thread_rng(), Instant::now())
    }

    pub fn start_with<R: Rng + ?Sized>(
        mode: GameMode,
        rng: &mut R,
        now: Instant,
    ) -> Result<Game, SessionError> {
        let mut session = Session::new();
        let scramble = session.scramble_with(mode.scramble_moves(), rng)?;
        // The scramble is not the player's to undo or replay.
        session.mark_baseline()?;
        session.reset_move_count();
        log::info!("Started {} game", mode);

        let mut game = Game {
            mode,
            session,
            scramble,
            started: now,
            solved_after: None,
        };
        // A zero-move daily scramble starts out solved.
        game.observe(now);
        Ok(game)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The moves that scrambled this game.
    pub fn scramble(&self) -> &[Move] {
        &self.scramble
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn apply_move(&mut self, move_: Move) -> Result<(), SessionError> {
        self.apply_move_at(move_, Instant::now())
    }

    pub fn apply_move_at(&mut self, move_: Move, now: Instant) -> Result<(), SessionError> {
        self.session.apply_move(move_)?;
        self.observe(now);
        Ok(())
    }

    pub fn undo(&mut self) -> Result<bool, SessionError> {
        self.undo_at(Instant::now())
    }

    pub fn undo_at(&mut self, now: Instant) -> Result<bool, SessionError> {
        let undone = self.session.undo()?;
        self.observe(now);
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<bool, SessionError> {
        self.redo_at(Instant::now())
    }

    pub fn redo_at(&mut self, now: Instant) -> Result<bool, SessionError> {
        let redone = self.session.redo()?;
        self.observe(now);
        Ok(redone)
    }

    /// Takes back the player's own moves at once, returning the cube to its
    /// scrambled start.
    pub fn solve(&mut self) -> Result<Vec<Move>, SessionError> {
        self.solve_at(Instant::now())
    }

    pub fn solve_at(&mut self, now: Instant) -> Result<Vec<Move>, SessionError> {
        let replayed = self.session.solve_now()?;
        self.observe(now);
        Ok(replayed)
    }

    fn expired_at(&self, now: Instant) -> bool {
        match self.mode.time_limit() {
            Some(limit) => now.saturating_duration_since(self.started) >= limit,
            None => false,
        }
    }

    fn observe(&mut self, now: Instant) {
        if self.solved_after.is_some() || !self.session.is_solved() || self.expired_at(now) {
            return;
        }
        let elapsed = now.saturating_duration_since(self.started);
        self.solved_after = Some(elapsed);
        log::info!(
            "{} game solved in {:?} with {} moves",
            self.mode,
            elapsed,
            self.session.move_count()
        );
    }

    pub fn status_at(&self, now: Instant) -> GameStatus {
        if self.solved_after.is_some() {
            GameStatus::Completed
        } else if self.expired_at(now) {
            GameStatus::Failed
        } else {
            GameStatus::InProgress
        }
    }

    /// Time on the clock, capped at the mode's limit.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        if let Some(elapsed) = self.solved_after {
            return elapsed;
        }
        let elapsed = now.saturating_duration_since(self.started);
        match self.mode.time_limit() {
            Some(limit) => elapsed.min(limit),
            None => elapsed,
        }
    }

    /// The record for the persistence collaborator. A game abandoned before
    /// it is solved or timed out is reported as failed.
    pub fn result_at(&self, now: Instant) -> GameResult {
        let solved = self.solved_after.is_some();
        GameResult {
            mode: self.mode,
            elapsed: self.elapsed_at(now),
            moves: self.session.move_count(),
            solved,
            status: if solved {
                GameStatus::Completed
            } else {
                GameStatus::Failed
            },
        }
    }

    pub fn result(&self) -> GameResult {
        self.result_at(Instant::now())
    }
}
