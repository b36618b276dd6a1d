use protocol::Rgb;

pub const DRAW_SECS: u32 = 60;
pub const GUESS_SECS: u32 = 30;
pub const CORRECT_POINTS: u32 = 10;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;
pub const BACKGROUND: Rgb = Rgb::WHITE;

pub const SOLO_PLAYER: &str = "You";

pub const DEFAULT_LINE_WIDTH: u8 = 3;
pub const MIN_LINE_WIDTH: u8 = 1;
pub const MAX_LINE_WIDTH: u8 = 20;
pub const ERASER_WIDTH: f32 = 20.0;

pub const PALETTE: [Rgb; 6] = [
    Rgb(0x00, 0x00, 0x00),
    Rgb(0xff, 0x00, 0x00),
    Rgb(0x00, 0xff, 0x00),
    Rgb(0x00, 0x00, 0xff),
    Rgb(0xff, 0xff, 0x00),
    Rgb(0xff, 0x00, 0xff),
];

pub const TICK: tokio::time::Duration = tokio::time::Duration::from_secs(1);
