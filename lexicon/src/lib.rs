//! Word pools and team rosters for the scribble game.

mod error;
mod lexicon;
mod roster;

pub use error::{ErrorKind, LexResult};
pub use lexicon::{Lexicon, BUILTIN_WORDS};
pub use roster::{Roster, DEFAULT_TEAM};
