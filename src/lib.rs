//! Quarter-turn engine for a 3×3×3 twisty puzzle.
//!
//! A [`Session`] owns the current [`CubeState`], the move log and the
//! undo/redo snapshot stacks. Renderers read the cubelet list and the solved
//! flag; input handlers submit [`Move`]s.

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod cube;
pub mod error;
pub mod game;
pub mod history;
mod r#move;
pub mod prelude;
pub mod session;
pub mod solve;


pub use prelude::*;
