//! Line-oriented commands for the terminal host.

use protocol::{ClientPoint, DisplayRect, Mode, PlayerRequest, Rgb, Tool};

use crate::consts::PALETTE;
use crate::error::{ErrorKind, GameResult};

pub const HELP: &str = "\
commands:
  team | solo               pick a mode and start drawing
  down X Y | move X Y | up  pointer input in client coordinates
  touch                     touch start without a touch point
  tool pencil|eraser        switch tool
  color #RRGGBB | color N   pick a colour, N from the palette 1-6
  width N                   line width, 1-20
  resize L T W H            where the canvas is shown on screen
  guess TEXT                submit a guess
  next | reset | clear | save
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Request(PlayerRequest),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> GameResult<Option<Command>> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let req = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "team" => PlayerRequest::SelectMode(Mode::Team),
        "solo" => PlayerRequest::SelectMode(Mode::Solo),
        "down" => PlayerRequest::PointerDown { client: Some(point("down", &args)?) },
        "move" => PlayerRequest::PointerMove { client: Some(point("move", &args)?) },
        "touch" => PlayerRequest::PointerDown { client: None },
        "up" | "leave" => PlayerRequest::PointerUp,
        "tool" => match args.first().map(|t| t.to_lowercase()).as_deref() {
            Some("pencil") => PlayerRequest::SetTool(Tool::Pencil),
            Some("eraser") => PlayerRequest::SetTool(Tool::Eraser),
            _ => return Err(bad("tool", "expected pencil or eraser")),
        },
        "color" | "colour" => {
            let arg = args.first().ok_or_else(|| bad("color", "missing #RRGGBB"))?;
            PlayerRequest::SetColor(colour(arg)?)
        }
        "width" => {
            let width = args.first().ok_or_else(|| bad("width", "missing value"))?;
            PlayerRequest::SetLineWidth(width.parse().map_err(|err| bad("width", err))?)
        }
        "resize" => {
            let [left, top, width, height] = numbers::<4>("resize", &args)?;
            PlayerRequest::Resize(DisplayRect { left, top, width, height })
        }
        "guess" => PlayerRequest::Guess { msg: rest.to_string() },
        "next" => PlayerRequest::NextRound,
        "reset" => PlayerRequest::Reset,
        "clear" => PlayerRequest::ClearCanvas,
        "save" => PlayerRequest::SaveDrawing,
        _ => return Err(ErrorKind::UnknownCommand(word.to_string())),
    };
    Ok(Some(Command::Request(req)))
}

fn bad(command: &'static str, reason: impl ToString) -> ErrorKind {
    ErrorKind::BadArgument { command, reason: reason.to_string() }
}

/// `#RRGGBB`, or a 1-based index into the palette.
fn colour(arg: &str) -> GameResult<Rgb> {
    if let Ok(idx) = arg.parse::<usize>() {
        return idx
            .checked_sub(1)
            .and_then(|i| PALETTE.get(i).copied())
            .ok_or_else(|| bad("color", format!("palette has {} colours", PALETTE.len())));
    }
    arg.parse().map_err(|err| bad("color", err))
}

fn point(command: &'static str, args: &[&str]) -> GameResult<ClientPoint> {
    let [x, y] = numbers::<2>(command, args)?;
    Ok(ClientPoint { x, y })
}

fn numbers<const N: usize>(command: &'static str, args: &[&str]) -> GameResult<[f32; N]> {
    if args.len() != N {
        return Err(bad(command, format!("expected {} numbers, got {}", N, args.len())));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|err| bad(command, err))?;
    }
    Ok(out)
}
