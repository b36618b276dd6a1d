use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    Drawing,
    Guessing,
    Ended,
}

impl Phase {
    /// Phases during which the round clock runs.
    pub fn is_timed(&self) -> bool {
        matches!(self, Phase::Drawing | Phase::Guessing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::Drawing => "drawing",
            Phase::Guessing => "guessing",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Team,
    Solo,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Team => f.write_str("Team"),
            Mode::Solo => f.write_str("Solo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Pencil,
    Eraser,
}

/// An opaque colour, written as `#RRGGBB` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    pub fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 0xff]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}, expected #RRGGBB")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

/// A position in host (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

/// Where the canvas sits on the host display, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinCodeMessage, GameEvent, PlayerRequest};

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#FF00ff".parse::<Rgb>(), Ok(Rgb(0xff, 0x00, 0xff)));
        assert_eq!(Rgb(0, 0x80, 0xff).to_string(), "#0080FF");
        assert!("FF00FF".parse::<Rgb>().is_err());
        assert!("#FF00F".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn only_drawing_and_guessing_are_timed() {
        assert!(!Phase::Waiting.is_timed());
        assert!(Phase::Drawing.is_timed());
        assert!(Phase::Guessing.is_timed());
        assert!(!Phase::Ended.is_timed());
    }

    #[test]
    fn colour_survives_bincode() {
        let event = GameEvent::Player(PlayerRequest::SetColor(Rgb(1, 2, 3)));
        let bin = event.ser().unwrap();
        assert_eq!(GameEvent::deser(&bin).unwrap(), event);
    }
}
