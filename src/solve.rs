use crate::prelude::*;

use std::sync::{
    mpsc::{channel, Receiver},
    Arc, Mutex, MutexGuard,
};
use std::thread::JoinHandle;

/// A session shared between an input handler and a solve worker.
pub type SharedSession = Arc<Mutex<Session>>;

pub fn shared(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}

fn lock(session: &SharedSession) -> Result<MutexGuard<'_, Session>, SessionError> {
    session.lock().map_err(|_| SessionError::Poisoned)
}

/// A solve replaying on a worker thread.
pub struct SolveHandle {
    total: usize,
    moves: Receiver<Move>,
    worker: JoinHandle<Result<usize, SessionError>>,
}

impl SolveHandle {
    /// Number of moves the replay will commit.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Replayed moves as they are committed. Ends once the replay is done.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter()
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the last replayed move has been committed and returns how
    /// many moves were replayed.
    pub fn wait(self) -> Result<usize, SessionError> {
        self.worker.join().map_err(|_| SessionError::Poisoned)?
    }
}

/// Starts a timed solve: one replayed move is committed every `delay`.
///
/// The session is input locked before this returns, so moves submitted by
/// other holders of the session fail with [`SessionError::InputLocked`]
/// until the replay completes.
///
/// If the session mutex is poisoned mid-replay the worker stops and
/// [`SolveHandle::wait`] returns [`SessionError::Poisoned`]. The remaining
/// replay stays queued, so the session stays input locked; callers should
/// discard it.
pub fn spawn_solve(session: &SharedSession, delay: Duration) -> Result<SolveHandle, SessionError> {
    let total = lock(session)?.begin_solve()?;

    let (tx, rx) = channel();
    let session = Arc::clone(session);
    let before_spawn = std::time::Instant::now();
    let worker = std::thread::spawn(move || {
        log::debug!("Took {:?} to spawn solve worker", before_spawn.elapsed());

        let mut replayed = 0;
        while replayed < total {
            std::thread::sleep(delay);
            match lock(&session)?.solve_step() {
                SolveStep::Applied(m) => {
                    replayed += 1;
                    tx.send(m).ok();
                }
                SolveStep::Finished => break,
            }
        }

        log::info!("Solve worker replayed {} of {} moves", replayed, total);
        Ok(replayed)
    });

    Ok(SolveHandle {
        total,
        moves: rx,
        worker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(moves: usize) -> SharedSession {
        let mut session = Session::new();
        session.scramble_with(moves, &mut seeded_rng(5)).unwrap();
        shared(session)
    }

    #[test]
    fn timed_solve_completes() {
        let session = scrambled(6);
        let expected = session
            .lock()
            .unwrap()
            .history()
            .iter()
            .rev()
            .map(|m| m.reverse())
            .collect::<Vec<_>>();

        let handle = spawn_solve(&session, Duration::from_millis(1)).unwrap();
        assert_eq!(handle.total(), 6);
        let replayed = handle.moves().collect::<Vec<_>>();
        assert_eq!(handle.wait(), Ok(6));
        assert_eq!(replayed, expected);

        let session = session.lock().unwrap();
        assert_eq!(session.state(), &CubeState::solved());
        assert!(session.history().is_empty());
        assert!(!session.input_locked());
    }

    #[test]
    fn moves_are_rejected_during_replay() {
        let session = scrambled(3);
        let handle = spawn_solve(&session, Duration::from_millis(50)).unwrap();

        let m = "X0".parse().unwrap();
        assert_eq!(
            session.lock().unwrap().apply_move(m),
            Err(SessionError::InputLocked)
        );
        assert!(spawn_solve(&session, Duration::from_millis(1)).is_err());

        assert_eq!(handle.wait(), Ok(3));
        assert!(session.lock().unwrap().is_solved());
        assert!(session.lock().unwrap().apply_move(m).is_ok());
    }

    #[test]
    fn poisoned_session_stops_the_replay_locked() {
        let session = scrambled(3);
        let handle = spawn_solve(&session, Duration::from_millis(50)).unwrap();

        let poisoner = Arc::clone(&session);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poisoning the session");
        })
        .join();

        assert_eq!(handle.wait(), Err(SessionError::Poisoned));
        let session = session.lock().unwrap_err().into_inner();
        assert!(session.input_locked());
    }

    #[test]
    fn empty_history_finishes_without_waiting() {
        let session = shared(Session::new());
        let handle = spawn_solve(&session, Duration::from_secs(60)).unwrap();
        assert_eq!(handle.wait(), Ok(0));
        assert!(!session.lock().unwrap().input_locked());
    }
}
