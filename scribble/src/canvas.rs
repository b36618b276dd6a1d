//! The drawing surface.
//!
//! Strokes are painted straight into an RGBA raster; there is no stroke
//! history. Each segment covers every pixel whose centre lies within half
//! the brush width of the segment, which gives round caps and joins.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use protocol::{ClientPoint, DisplayRect, Rgb, Tool};

use crate::error::{ErrorKind, GameResult};

/// A position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Brush settings, captured once per stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub tool: Tool,
    pub color: Rgb,
    pub width: f32,
}

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub struct Canvas {
    surface: RgbaImage,
    background: Rgb,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut canvas = Self {
            surface: RgbaImage::new(width, height),
            background,
        };
        canvas.clear();
        canvas
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Fills the whole surface with the background colour.
    pub fn clear(&mut self) {
        let fill = Rgba(self.background.to_rgba());
        for px in self.surface.pixels_mut() {
            *px = fill;
        }
    }

    /// Maps a client position onto the canvas, compensating for the canvas
    /// being displayed at a different size than its raster. A missing
    /// position is treated as the client origin.
    pub fn to_canvas(&self, client: Option<ClientPoint>, rect: &DisplayRect) -> Point {
        let client = client.unwrap_or(ClientPoint { x: 0.0, y: 0.0 });
        let scale = |raster: u32, shown: f32| {
            if shown > 0.0 {
                raster as f32 / shown
            } else {
                1.0
            }
        };
        Point {
            x: (client.x - rect.left) * scale(self.width(), rect.width),
            y: (client.y - rect.top) * scale(self.height(), rect.height),
        }
    }

    /// Paints one stroke segment. The pencil writes the brush colour, the
    /// eraser punches fully transparent pixels.
    pub fn segment(&mut self, from: Point, to: Point, brush: &Brush) {
        let radius = brush.width / 2.0;
        if !(radius > 0.0) || self.width() == 0 || self.height() == 0 {
            return;
        }

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f32 - 1.0);
        if !(min_x <= max_x && min_y <= max_y) {
            return;
        }

        let paint = match brush.tool {
            Tool::Pencil => Rgba(brush.color.to_rgba()),
            Tool::Eraser => TRANSPARENT,
        };
        let radius_sq = radius * radius;
        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq(centre, from, to) <= radius_sq {
                    self.surface.put_pixel(x, y, paint);
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.surface.get_pixel_checked(x, y).map(|px| px.0)
    }

    /// True when no stroke has left a mark since the last clear.
    pub fn is_blank(&self) -> bool {
        let fill = Rgba(self.background.to_rgba());
        self.surface.pixels().all(|px| *px == fill)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.surface
    }

    pub fn encode_png(&self) -> GameResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.surface.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Writes the surface as a PNG into `dir` and returns the file path.
    pub fn export(&self, dir: &Path, word: &str) -> GameResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(ErrorKind::io(dir))?;
        let path = dir.join(export_file_name(word, chrono::Utc::now().timestamp_millis()));
        self.surface.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

/// `scribble-<word>-<millis>.png`, falling back to `drawing` without a word.
pub fn export_file_name(word: &str, millis: i64) -> String {
    let word: String = word
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let word = if word.is_empty() { "drawing".to_string() } else { word };
    format!("scribble-{}-{}.png", word, millis)
}

fn distance_sq(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.x + t * dx - p.x, a.y + t * dy - p.y);
    cx * cx + cy * cy
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(0xff, 0x00, 0x00);

    fn pencil(width: f32) -> Brush {
        Brush { tool: Tool::Pencil, color: RED, width }
    }

    fn rect(left: f32, top: f32, width: f32, height: f32) -> DisplayRect {
        DisplayRect { left, top, width, height }
    }

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(8, 4, Rgb::WHITE);
        assert!(canvas.is_blank());
        assert_eq!(canvas.pixel(7, 3), Some([0xff, 0xff, 0xff, 0xff]));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn pencil_paints_along_segment_only() {
        let mut canvas = Canvas::new(40, 20, Rgb::WHITE);
        canvas.segment(Point::new(5.0, 10.0), Point::new(35.0, 10.0), &pencil(3.0));
        assert_eq!(canvas.pixel(20, 10), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(5, 10), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(20, 2), Some([0xff, 0xff, 0xff, 0xff]));
        assert_eq!(canvas.pixel(20, 15), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn caps_are_round() {
        let mut canvas = Canvas::new(40, 40, Rgb::WHITE);
        canvas.segment(Point::new(20.0, 20.0), Point::new(20.0, 20.0), &pencil(10.0));
        assert_eq!(canvas.pixel(20, 20), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(24, 20), Some([0xff, 0, 0, 0xff]));
        // square corner of the bounding box stays untouched
        assert_eq!(canvas.pixel(15, 15), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn eraser_removes_pixels() {
        let mut canvas = Canvas::new(40, 40, Rgb::WHITE);
        let eraser = Brush { tool: Tool::Eraser, color: RED, width: 20.0 };
        canvas.segment(Point::new(20.0, 20.0), Point::new(21.0, 20.0), &eraser);
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(11, 20), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(0, 0), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn out_of_bounds_segment_is_clipped() {
        let mut canvas = Canvas::new(10, 10, Rgb::WHITE);
        canvas.segment(Point::new(-50.0, -50.0), Point::new(-40.0, -40.0), &pencil(4.0));
        assert!(canvas.is_blank());
        canvas.segment(Point::new(-5.0, 5.0), Point::new(500.0, 5.0), &pencil(2.0));
        assert_eq!(canvas.pixel(9, 5), Some([0xff, 0, 0, 0xff]));
    }

    #[test]
    fn clear_discards_strokes() {
        let mut canvas = Canvas::new(10, 10, Rgb::WHITE);
        canvas.segment(Point::new(1.0, 1.0), Point::new(8.0, 8.0), &pencil(3.0));
        assert!(!canvas.is_blank());
        canvas.clear();
        assert!(canvas.is_blank());
    }

    #[test]
    fn client_coordinates_follow_display_scaling() {
        let canvas = Canvas::new(600, 400, Rgb::WHITE);
        let shown = rect(100.0, 50.0, 300.0, 200.0);
        let point = canvas.to_canvas(Some(ClientPoint { x: 250.0, y: 150.0 }), &shown);
        assert_eq!(point, Point::new(300.0, 200.0));
    }

    #[test]
    fn missing_touch_point_falls_back_to_origin() {
        let canvas = Canvas::new(600, 400, Rgb::WHITE);
        assert_eq!(canvas.to_canvas(None, &rect(0.0, 0.0, 600.0, 400.0)), Point::ORIGIN);
        // degenerate display size does not divide by zero
        let point = canvas.to_canvas(Some(ClientPoint { x: 4.0, y: 2.0 }), &rect(0.0, 0.0, 0.0, 0.0));
        assert_eq!(point, Point::new(4.0, 2.0));
    }

    #[test]
    fn png_encoding_has_signature() {
        let canvas = Canvas::new(4, 4, Rgb::WHITE);
        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn export_names() {
        assert_eq!(export_file_name("Pizza", 42), "scribble-Pizza-42.png");
        assert_eq!(export_file_name("", 42), "scribble-drawing-42.png");
        assert_eq!(export_file_name("../x", 1), "scribble-___x-1.png");
    }
}
