//! Draw-and-guess round engine.
//!
//! [`game::Game`] is the synchronous core: the round state machine, the
//! canvas and the tool selection. [`room::Room`] hosts a game on tokio,
//! adding the one-second clock, response fan-out and session recording.

pub mod canvas;
pub mod command;
pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod logger;
pub mod room;
pub mod session;

pub use config::Config;
pub use error::{ErrorKind, GameResult};
pub use game::Game;
pub use room::{Room, RoomReq};
