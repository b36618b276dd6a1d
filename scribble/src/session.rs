//! Session recording and replay.
//!
//! A session file holds a bincode [`SessionHeader`] followed by every
//! [`GameEvent`] the room applied, each frame prefixed with its length as
//! a little-endian `u32`. Replaying the events against a game seeded the
//! same way reproduces the round and the drawing.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use protocol::{BinCodeMessage, GameEvent, PlayerRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::error::{ErrorKind, GameResult};
use crate::game::Game;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub seed: u64,
    pub config: Config,
}

impl BinCodeMessage<'_> for SessionHeader {}

pub struct SessionWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl SessionWriter {
    pub fn create(path: impl AsRef<Path>, header: &SessionHeader) -> GameResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(ErrorKind::io(&path))?;
        let mut writer = Self {
            path,
            out: BufWriter::new(file),
        };
        writer.write(&header.ser()?)?;
        Ok(writer)
    }

    pub fn append(&mut self, event: &GameEvent) -> GameResult<()> {
        self.write(&event.ser()?)
    }

    pub fn flush(&mut self) -> GameResult<()> {
        self.out.flush().map_err(ErrorKind::io(&self.path))
    }

    fn write(&mut self, bin: &[u8]) -> GameResult<()> {
        write_frame(&mut self.out, bin).map_err(ErrorKind::io(&self.path))
    }
}

fn write_frame(out: &mut impl Write, bin: &[u8]) -> io::Result<()> {
    out.write_all(&(bin.len() as u32).to_le_bytes())?;
    out.write_all(bin)
}

/// Upper bound on one encoded event or header.
const MAX_FRAME: usize = 1 << 20;

/// `Ok(None)` at a clean end of input. A frame cut short is reported as
/// the end as well, since a crashed recorder leaves one behind.
fn read_frame(input: &mut impl Read) -> io::Result<Option<Vec<u8>>> {
    let mut len = [0u8; 4];
    match input.read_exact(&mut len) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err),
    }
    let len = u32::from_le_bytes(len) as usize;
    if len > MAX_FRAME {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("frame of {} bytes exceeds the {} byte limit", len, MAX_FRAME),
        ));
    }
    let mut bin = vec![0u8; len];
    match input.read_exact(&mut bin) {
        Ok(()) => Ok(Some(bin)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            log::warn!("session ends with a truncated frame");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub header: SessionHeader,
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Errors carry an empty path; [`Session::load`] fills it in.
    pub fn read_from(input: &mut impl Read) -> GameResult<Self> {
        let header = match read_frame(input).map_err(ErrorKind::io(PathBuf::new()))? {
            Some(bin) => SessionHeader::deser(&bin)?,
            None => {
                return Err(ErrorKind::Io {
                    path: PathBuf::new(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "session has no header"),
                })
            }
        };
        let mut events = vec![];
        while let Some(bin) = read_frame(input).map_err(ErrorKind::io(PathBuf::new()))? {
            events.push(GameEvent::deser(&bin)?);
        }
        Ok(Self { header, events })
    }

    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(ErrorKind::io(path))?;
        let session = Self::read_from(&mut BufReader::new(file)).map_err(|err| match err {
            ErrorKind::Io { source, .. } => ErrorKind::Io { path: path.to_path_buf(), source },
            other => other,
        })?;
        log::info!("loaded session {} with {} events", path.display(), session.events.len());
        Ok(session)
    }

    /// Rebuilds the game from the recorded events. Saves are skipped so a
    /// replay never writes files on its own.
    pub fn replay(&self) -> GameResult<Game<StdRng>> {
        let rng = StdRng::seed_from_u64(self.header.seed);
        let mut game = Game::new(&self.header.config, rng)?;
        for event in &self.events {
            if matches!(event, GameEvent::Player(PlayerRequest::SaveDrawing)) {
                continue;
            }
            game.handle(event.clone())?;
        }
        Ok(game)
    }
}
