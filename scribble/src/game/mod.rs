//! One player's scribble table: the round state machine, the canvas it
//! draws on and the tool selection, driven by [`GameEvent`]s.

mod round;
mod tools;

pub use round::{Action, Effect, Round, Rules, Setup};
pub use tools::{ActiveStroke, ToolState};

use std::path::PathBuf;

use protocol::{DisplayRect, GameEvent, Phase, PlayerRequest as PlayerReq, PlayerResponse as PlayerResp, RoundView};
use rand::Rng;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::GameResult;

pub struct Game<R> {
    setup: Setup,
    round: Round,
    canvas: Canvas,
    tools: ToolState,
    stroke: Option<ActiveStroke>,
    viewport: DisplayRect,
    export_dir: PathBuf,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &Config, rng: R) -> GameResult<Self> {
        config.validate()?;
        let setup = Setup {
            lexicon: config.lexicon()?,
            roster: config.roster(),
            rules: Rules::from_config(config),
        };
        Ok(Self::with_setup(setup, config, rng))
    }

    /// Like [`Game::new`] but with an explicit word pool and roster.
    pub fn with_setup(setup: Setup, config: &Config, rng: R) -> Self {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height, config.background);
        let viewport = DisplayRect {
            left: 0.0,
            top: 0.0,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        };
        Self {
            round: Round::new(&setup.rules),
            setup,
            canvas,
            tools: ToolState::default(),
            stroke: None,
            viewport,
            export_dir: config.export_dir.clone(),
            rng,
        }
    }

    /// Feeds one event through the game and returns what the host should
    /// show. A fresh `RoundState` is included whenever the round changed.
    pub fn handle(&mut self, event: GameEvent) -> GameResult<Vec<PlayerResp>> {
        let before = self.round.view();
        let mut out = vec![];
        match event {
            GameEvent::Tick => self.act(Action::Tick, &mut out),
            GameEvent::Player(req) if !self.accepts(&req) => {
                log::debug!("ignoring {:?} during {}", req, self.round.phase);
            }
            GameEvent::Player(req) => match req {
                PlayerReq::SelectMode(mode) => self.act(Action::SelectMode(mode), &mut out),
                PlayerReq::Guess { msg } => self.act(Action::Guess(msg), &mut out),
                PlayerReq::NextRound => self.act(Action::NextRound, &mut out),
                PlayerReq::Reset => self.act(Action::Reset, &mut out),
                PlayerReq::PointerDown { client } => {
                    let at = self.canvas.to_canvas(client, &self.viewport);
                    self.stroke = Some(ActiveStroke { brush: self.tools.brush(), last: at });
                }
                PlayerReq::PointerMove { client } => {
                    if let Some(ref mut stroke) = self.stroke {
                        let at = self.canvas.to_canvas(client, &self.viewport);
                        self.canvas.segment(stroke.last, at, &stroke.brush);
                        stroke.last = at;
                    }
                }
                PlayerReq::PointerUp => {
                    self.stroke.take();
                }
                PlayerReq::Resize(rect) => self.viewport = rect,
                PlayerReq::SetTool(tool) => self.tools.tool = tool,
                PlayerReq::SetColor(color) => self.tools.color = color,
                PlayerReq::SetLineWidth(width) => self.tools.set_line_width(width),
                PlayerReq::ClearCanvas => self.canvas.clear(),
                PlayerReq::SaveDrawing => {
                    let path = self.canvas.export(&self.export_dir, &self.round.word)?;
                    out.push(PlayerResp::Saved { path: path.display().to_string() });
                    out.push(PlayerResp::Notice {
                        title: "Drawing Saved!".to_string(),
                        msg: "Your artwork has been downloaded successfully.".to_string(),
                        destructive: false,
                    });
                }
            },
        }

        let after = self.round.view();
        if after != before {
            out.push(PlayerResp::RoundState(after));
        }
        Ok(out)
    }

    /// Pointer and tool input only counts while the artist is drawing.
    fn accepts(&self, req: &PlayerReq) -> bool {
        match req {
            PlayerReq::PointerDown { .. }
            | PlayerReq::PointerMove { .. }
            | PlayerReq::SetTool(_)
            | PlayerReq::SetColor(_)
            | PlayerReq::SetLineWidth(_) => self.round.phase == Phase::Drawing,
            _ => true,
        }
    }

    fn act(&mut self, action: Action, out: &mut Vec<PlayerResp>) {
        for effect in self.round.update(action, &self.setup, &mut self.rng) {
            match effect {
                Effect::ClearCanvas => self.canvas.clear(),
                Effect::EndStroke => {
                    self.stroke.take();
                }
                Effect::Notice { title, msg, destructive } => {
                    out.push(PlayerResp::Notice { title, msg, destructive })
                }
            }
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn view(&self) -> RoundView {
        self.round.view()
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }
}
