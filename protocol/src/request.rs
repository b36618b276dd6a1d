use serde::{Deserialize, Serialize};
use crate::BinCodeMessage;
use crate::types::*;

/// Input coming from the host UI.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub enum PlayerRequest {
    SelectMode(Mode),
    /// `client` is `None` when a touch event carries no touch point.
    PointerDown {
        client: Option<ClientPoint>,
    },
    PointerMove {
        client: Option<ClientPoint>,
    },
    /// Pointer up, touch end or the pointer leaving the canvas.
    PointerUp,
    Resize(DisplayRect),
    SetTool(Tool),
    SetColor(Rgb),
    SetLineWidth(u8),
    Guess {
        msg: String,
    },
    NextRound,
    Reset,
    ClearCanvas,
    SaveDrawing,
}

impl BinCodeMessage<'_> for PlayerRequest {}

/// Everything that can move a game forward: host input or a timer tick.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub enum GameEvent {
    Player(PlayerRequest),
    Tick,
}

impl BinCodeMessage<'_> for GameEvent {}

impl From<PlayerRequest> for GameEvent {
    fn from(req: PlayerRequest) -> Self {
        GameEvent::Player(req)
    }
}
