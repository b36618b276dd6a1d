use serde::{Serialize, Deserialize};
use crate::BinCodeMessage;
use crate::types::*;

/// What the host is allowed to render of the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: Phase,
    pub mode: Option<Mode>,
    pub player: String,
    /// Only present while drawing (artist view) and once the round ended.
    pub word: Option<String>,
    pub time_remaining: u32,
    pub score: u32,
    pub round: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerResponse {
    RoundState(RoundView),
    Notice {
        title: String,
        msg: String,
        destructive: bool,
    },
    Saved {
        path: String,
    },
}

impl BinCodeMessage<'_> for PlayerResponse {}
impl BinCodeMessage<'_> for RoundView {}
