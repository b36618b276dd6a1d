use std::path::PathBuf;

use clap::{Parser, Subcommand};
use protocol::{Phase, PlayerResponse, RoundView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use scribble::command::{self, Command};
use scribble::session::{Session, SessionHeader, SessionWriter};
use scribble::{logger, Config, ErrorKind, Game, GameResult, Room, RoomReq};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Play interactively, one command per stdin line
    Play {
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        seed: Option<u64>,
        /// Record the session for later replay
        #[clap(short, long)]
        record: Option<PathBuf>,
    },
    /// Replay a recorded session and export the final drawing
    Replay {
        session: PathBuf,
        #[clap(short, long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    logger::init();
    let args = Args::parse();
    let res = match args.command {
        Cmd::Play { config, seed, record } => play(config, seed, record).await,
        Cmd::Replay { session, out } => replay(session, out),
    };
    if let Err(err) = res {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn play(config: Option<PathBuf>, seed: Option<u64>, record: Option<PathBuf>) -> GameResult<()> {
    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);

    let game = Game::new(&config, StdRng::seed_from_u64(seed))?;
    let (resp_tx, mut resp_rx) = mpsc::channel::<PlayerResponse>(128);
    let mut room = Room::new(game, resp_tx);
    if let Some(path) = record {
        let header = SessionHeader { seed, config: config.clone() };
        room = room.record(SessionWriter::create(&path, &header)?);
        log::info!("recording to {}", path.display());
    }
    let room_tx = room.get_tx();
    let room_handle = tokio::spawn(room.run());

    let printer = tokio::spawn(async move {
        let mut last_phase = None;
        while let Some(resp) = resp_rx.recv().await {
            print_response(&resp, &mut last_phase);
        }
    });

    println!("{}", command::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(ErrorKind::io("<stdin>"))? {
        match command::parse(&line) {
            Ok(Some(Command::Request(req))) => {
                if room_tx.send(RoomReq::PlayerReq(req)).await.is_err() {
                    break;
                }
            }
            Ok(Some(Command::Help)) => println!("{}", command::HELP),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(err) => println!("{}", err),
        }
    }

    room_tx.send(RoomReq::Close).await.unwrap_or_default();
    let game = room_handle.await?;
    printer.await?;
    let view = game.view();
    println!("final score {} after {} round(s)", view.score, view.round);
    Ok(())
}

fn replay(path: PathBuf, out: PathBuf) -> GameResult<()> {
    let session = Session::load(&path)?;
    let game = session.replay()?;
    print_view(&game.view());
    let file = game.canvas().export(&out, &game.round().word)?;
    println!("exported {}", file.display());
    Ok(())
}

fn print_response(resp: &PlayerResponse, last_phase: &mut Option<Phase>) {
    match resp {
        PlayerResponse::Notice { title, msg, destructive } => {
            let mark = if *destructive { "!" } else { "*" };
            println!("{} {}: {}", mark, title, msg);
        }
        PlayerResponse::Saved { path } => println!("saved {}", path),
        PlayerResponse::RoundState(view) => {
            // every tick produces a state; only echo the interesting ones
            let changed = *last_phase != Some(view.phase);
            if changed || view.time_remaining % 10 == 0 || view.time_remaining <= 5 {
                print_view(view);
            }
            *last_phase = Some(view.phase);
        }
    }
}

fn print_view(view: &RoundView) {
    let mode = view.mode.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
    let word = view.word.as_deref().unwrap_or("?");
    println!(
        "[round {}][{}][{}] player {} | word {} | {}s | score {}",
        view.round, mode, view.phase, view.player, word, view.time_remaining, view.score
    );
}
