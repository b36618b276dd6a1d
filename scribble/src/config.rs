use std::path::{Path, PathBuf};

use lexicon::{Lexicon, Roster, BUILTIN_WORDS, DEFAULT_TEAM};
use protocol::Rgb;
use serde::{Serialize, Deserialize};

use crate::consts::*;
use crate::error::{ErrorKind, GameResult};

/// Game settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inline word pool, used when `lexicon_file` is unset.
    pub words: Vec<String>,
    pub lexicon_file: Option<PathBuf>,
    pub user_name: String,
    pub team: Vec<String>,
    pub draw_secs: u32,
    pub guess_secs: u32,
    pub points: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: Rgb,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            lexicon_file: None,
            user_name: SOLO_PLAYER.to_string(),
            team: DEFAULT_TEAM.iter().map(|m| m.to_string()).collect(),
            draw_secs: DRAW_SECS,
            guess_secs: GUESS_SECS,
            points: CORRECT_POINTS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            background: BACKGROUND,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(ErrorKind::io(path))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ErrorKind::InvalidConfig(format!(
                "canvas must not be empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.draw_secs == 0 || self.guess_secs == 0 {
            return Err(ErrorKind::InvalidConfig(format!(
                "phase lengths must be positive, got draw {}s guess {}s",
                self.draw_secs, self.guess_secs
            )));
        }
        if self.user_name.trim().is_empty() {
            return Err(ErrorKind::InvalidConfig("user_name is blank".to_string()));
        }
        Ok(())
    }

    pub fn lexicon(&self) -> GameResult<Lexicon> {
        let lexicon = match self.lexicon_file {
            Some(ref path) => Lexicon::load(path)?,
            None => Lexicon::from_words("config", self.words.iter().cloned())?,
        };
        Ok(lexicon)
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.user_name.clone(), self.team.iter().cloned())
    }
}
