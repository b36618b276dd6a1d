mod request;
mod timer;

use tokio::sync::mpsc::{Sender, Receiver, channel};
use tokio::sync::watch;
use tokio::time::Duration;

use protocol::{GameEvent, Phase, PlayerResponse as PlayerResp, RoundView};
use rand::Rng;

use crate::consts::*;
use crate::game::Game;
use crate::session::SessionWriter;
pub use request::Request as RoomReq;
pub use timer::Ticker;

/// Hosts one game: serialises host input and clock ticks into the game,
/// and owns the ticker that keeps the round clock running.
pub struct Room<R> {
    game: Game<R>,

    rm_rx: Receiver<RoomReq>,
    loopback: Sender<RoomReq>,

    resp_tx: Sender<PlayerResp>,
    state_tx: watch::Sender<RoundView>,

    ticker: Option<Ticker>,
    epoch: u64,
    period: Duration,

    recorder: Option<SessionWriter>,
}

impl<R: Rng> Room<R> {
    pub fn new(game: Game<R>, resp_tx: Sender<PlayerResp>) -> Self {
        let (loopback, rm_rx) = channel::<RoomReq>(32);
        let (state_tx, _) = watch::channel(game.view());

        Self {
            game,

            rm_rx,
            loopback,

            resp_tx,
            state_tx,

            ticker: None,
            epoch: 0,
            period: TICK,

            recorder: None,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Appends every applied event to `recorder`.
    pub fn record(mut self, recorder: SessionWriter) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn get_tx(&self) -> Sender<RoomReq> {
        self.loopback.clone()
    }

    /// Latest round snapshot, updated after every handled event.
    pub fn subscribe(&self) -> watch::Receiver<RoundView> {
        self.state_tx.subscribe()
    }

    /// Runs until a [`RoomReq::Close`] arrives, then hands the game back.
    pub async fn run(mut self) -> Game<R> {
        while let Some(req) = self.rm_rx.recv().await {
            let event = match req {
                RoomReq::PlayerReq(req) => GameEvent::Player(req),
                RoomReq::Tick(epoch) => {
                    if self.ticker.as_ref().map(Ticker::epoch) != Some(epoch) {
                        log::debug!("dropping stale tick from epoch {}", epoch);
                        continue;
                    }
                    GameEvent::Tick
                }
                RoomReq::Close => break,
            };
            self.dispatch(event).await;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if let Some(mut recorder) = self.recorder.take() {
            if let Err(err) = recorder.flush() {
                log::warn!("failed to flush session: {}", err);
            }
        }
        log::info!("room closed");
        self.game
    }

    async fn dispatch(&mut self, event: GameEvent) {
        let failed = match self.recorder.as_mut() {
            Some(recorder) => recorder.append(&event).err(),
            None => None,
        };
        if let Some(err) = failed {
            log::warn!("session recording stopped: {}", err);
            self.recorder = None;
        }

        let before = self.game.phase();
        let responses = match self.game.handle(event) {
            Ok(responses) => responses,
            Err(err) => {
                log::warn!("request failed: {}", err);
                vec![PlayerResp::Notice {
                    title: "Something went wrong".to_string(),
                    msg: err.to_string(),
                    destructive: true,
                }]
            }
        };
        let after = self.game.phase();
        if before != after {
            log::info!("round {}: {} -> {}", self.game.round().round_number, before, after);
        }
        self.sync_ticker(before, after);

        for resp in responses {
            self.resp_tx.send(resp).await.unwrap_or_default();
        }
        self.state_tx.send_replace(self.game.view());
    }

    /// Every entry into a timed phase gets a fresh ticker and epoch; leaving
    /// the timed phases stops it.
    fn sync_ticker(&mut self, before: Phase, after: Phase) {
        if before == after {
            return;
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if after.is_timed() {
            self.epoch += 1;
            log::debug!("starting ticker epoch {}", self.epoch);
            self.ticker = Some(Ticker::start(self.epoch, self.period, self.loopback.clone()));
        }
    }
}
