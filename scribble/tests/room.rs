//! Room behaviour under tokio's paused clock: the ticker advances rounds on
//! its own, stale ticks are dropped, and a recorded session replays to the
//! same state.

use protocol::{ClientPoint, Mode, Phase, PlayerRequest, PlayerResponse, RoundView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use scribble::session::{Session, SessionHeader, SessionWriter};
use scribble::{Config, Game, Room, RoomReq};

fn config() -> Config {
    Config {
        words: vec!["Pizza".to_string()],
        draw_secs: 3,
        guess_secs: 2,
        ..Config::new()
    }
}

struct Running {
    tx: mpsc::Sender<RoomReq>,
    state: watch::Receiver<RoundView>,
    handle: JoinHandle<Game<StdRng>>,
    _drain: JoinHandle<Vec<PlayerResponse>>,
}

fn launch(room: Room<StdRng>, resp_rx: mpsc::Receiver<PlayerResponse>) -> Running {
    let tx = room.get_tx();
    let state = room.subscribe();
    let handle = tokio::spawn(room.run());
    let _drain = tokio::spawn(drain(resp_rx));
    Running { tx, state, handle, _drain }
}

fn start(config: &Config, seed: u64) -> Running {
    let game = Game::new(config, StdRng::seed_from_u64(seed)).unwrap();
    let (resp_tx, resp_rx) = mpsc::channel(128);
    launch(Room::new(game, resp_tx), resp_rx)
}

async fn drain(mut rx: mpsc::Receiver<PlayerResponse>) -> Vec<PlayerResponse> {
    let mut seen = vec![];
    while let Some(resp) = rx.recv().await {
        seen.push(resp);
    }
    seen
}

async fn send(tx: &mpsc::Sender<RoomReq>, req: PlayerRequest) {
    tx.send(RoomReq::PlayerReq(req)).await.unwrap();
}

async fn wait_for(state: &mut watch::Receiver<RoundView>, pred: impl Fn(&RoundView) -> bool) {
    loop {
        if pred(&state.borrow()) {
            return;
        }
        state.changed().await.unwrap();
    }
}

async fn close(running: Running) -> Game<StdRng> {
    running.tx.send(RoomReq::Close).await.unwrap();
    running.handle.await.unwrap()
}

#[tokio::test(start_paused = true)]
async fn ticker_drives_round_to_the_end() {
    let mut running = start(&config(), 1);
    send(&running.tx, PlayerRequest::SelectMode(Mode::Solo)).await;

    wait_for(&mut running.state, |v| v.phase == Phase::Guessing).await;
    assert_eq!(running.state.borrow().time_remaining, 2);
    assert_eq!(running.state.borrow().word, None);

    wait_for(&mut running.state, |v| v.phase == Phase::Ended).await;
    assert_eq!(running.state.borrow().word.as_deref(), Some("Pizza"));

    // nothing moves once the round is over
    sleep(Duration::from_secs(30)).await;
    let game = close(running).await;
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.round().score, 0);
}

#[tokio::test(start_paused = true)]
async fn correct_guess_ends_round_before_timeout() {
    let mut running = start(&config(), 1);
    send(&running.tx, PlayerRequest::SelectMode(Mode::Solo)).await;
    wait_for(&mut running.state, |v| v.phase == Phase::Guessing).await;

    send(&running.tx, PlayerRequest::Guess { msg: "PiZZa".into() }).await;
    wait_for(&mut running.state, |v| v.phase == Phase::Ended).await;
    assert_eq!(running.state.borrow().score, 10);

    send(&running.tx, PlayerRequest::NextRound).await;
    wait_for(&mut running.state, |v| v.round == 2).await;
    assert_eq!(running.state.borrow().phase, Phase::Drawing);
    close(running).await;
}

#[tokio::test(start_paused = true)]
async fn foreign_ticks_are_ignored() {
    let running = start(&config(), 1);
    send(&running.tx, PlayerRequest::SelectMode(Mode::Solo)).await;
    for epoch in [0, 7, 42] {
        running.tx.send(RoomReq::Tick(epoch)).await.unwrap();
    }
    let game = close(running).await;
    assert_eq!(game.phase(), Phase::Drawing);
    assert_eq!(game.round().time_remaining, 3);
}

#[tokio::test(start_paused = true)]
async fn reset_stops_the_clock() {
    let mut running = start(&config(), 1);
    send(&running.tx, PlayerRequest::SelectMode(Mode::Solo)).await;
    wait_for(&mut running.state, |v| v.time_remaining == 2).await;

    send(&running.tx, PlayerRequest::Reset).await;
    wait_for(&mut running.state, |v| v.phase == Phase::Waiting).await;
    sleep(Duration::from_secs(10)).await;

    let game = close(running).await;
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(game.round().time_remaining, 3);
    assert!(game.canvas().is_blank());
}

#[tokio::test(start_paused = true)]
async fn recorded_session_replays_identically() {
    let path = std::env::temp_dir().join(format!("scribble-session-{}.bin", std::process::id()));
    let config = config();
    let header = SessionHeader { seed: 5, config: config.clone() };

    let game = Game::new(&config, StdRng::seed_from_u64(header.seed)).unwrap();
    let (resp_tx, resp_rx) = mpsc::channel(128);
    let room = Room::new(game, resp_tx).record(SessionWriter::create(&path, &header).unwrap());
    let mut running = launch(room, resp_rx);

    send(&running.tx, PlayerRequest::SelectMode(Mode::Team)).await;
    let at = |x, y| Some(ClientPoint { x, y });
    send(&running.tx, PlayerRequest::PointerDown { client: at(20.0, 20.0) }).await;
    send(&running.tx, PlayerRequest::PointerMove { client: at(120.0, 80.0) }).await;
    send(&running.tx, PlayerRequest::PointerUp).await;
    wait_for(&mut running.state, |v| v.phase == Phase::Guessing).await;
    send(&running.tx, PlayerRequest::Guess { msg: "nope".into() }).await;
    wait_for(&mut running.state, |v| v.phase == Phase::Ended).await;
    let live = close(running).await;

    let session = Session::load(&path).unwrap();
    assert_eq!(session.header, header);
    let replayed = session.replay().unwrap();
    assert_eq!(replayed.view(), live.view());
    assert_eq!(replayed.canvas().as_image(), live.canvas().as_image());
    assert!(!replayed.canvas().is_blank());

    std::fs::remove_file(path).unwrap();
}
