pub use crate::cube::*;
pub use crate::error::*;
pub use crate::game::*;
pub use crate::history::*;
pub use crate::r#move::*;
pub use crate::session::*;
pub use crate::solve::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
