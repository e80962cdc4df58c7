//! Character-cell renderer for the zone strip
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Vector3;
use pz3d_core::{SceneBackend, Viewport, ZoneLayout};
use std::f32::consts::PI;
use std::io::Write;

/// Spinner frames standing in for the rotating pyramid
const SPINNER: &[char] = &['|', '/', '-', '\\'];

/// Alternating fills so neighbouring zones stay distinguishable
const ZONE_FILL: &[char] = &['░', '▒'];

const ACTIVE_FILL: char = '█';

/// Draws one column band per zone, the label line and the overlay line
pub struct ZoneStripRenderer {
    width: usize,
    height: usize,
    layout: ZoneLayout,
    label: String,
    angles: Vector3<f32>,
    overlay: Option<(usize, String)>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl ZoneStripRenderer {
    pub fn new(width: usize, height: usize, layout: ZoneLayout, label: impl Into<String>) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            layout,
            label: label.into(),
            angles: Vector3::zeros(),
            overlay: None,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    /// Set the zone and resource currently shown by the overlay.
    pub fn set_overlay(&mut self, overlay: Option<(usize, String)>) {
        self.overlay = overlay;
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.char_buffer[row * self.width + column])
    }

    fn put_str(&mut self, row: usize, column: usize, text: &str, color: Color) {
        if row >= self.height {
            return;
        }
        for (offset, c) in text.chars().enumerate() {
            let x = column + offset;
            if x >= self.width {
                break;
            }
            let idx = row * self.width + x;
            self.char_buffer[idx] = c;
            self.color_buffer[idx] = color;
        }
    }

    fn rasterize_strip(&mut self) {
        let active = self.overlay.as_ref().map(|(zone, _)| *zone);

        for x in 0..self.width {
            // Same normalization the input side uses for a mouse column
            let zone = self.layout.index_for(x as f32 / self.width as f32);
            let (character, color) = if Some(zone) == active {
                (ACTIVE_FILL, Color::Green)
            } else {
                (ZONE_FILL[zone % ZONE_FILL.len()], Color::DarkGrey)
            };

            for y in 1..self.height.saturating_sub(1) {
                let idx = y * self.width + x;
                self.char_buffer[idx] = character;
                self.color_buffer[idx] = color;
            }
        }
    }

    fn rasterize_label(&mut self) {
        let glyph = spinner_glyph(self.angles.y);
        let text = format!(" {} {} {} ", glyph, self.label, glyph);
        let len = text.chars().count();
        let column = self.width.saturating_sub(len) / 2;
        self.put_str(self.height / 2, column, &text, Color::Red);
    }

    fn rasterize_overlay_line(&mut self) {
        let text = match &self.overlay {
            Some((zone, resource)) => format!("overlay: zone {} -> {}", zone, resource),
            None => "overlay: hidden".to_string(),
        };
        let row = self.height.saturating_sub(1);
        self.put_str(row, 0, &text, Color::Yellow);
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];
                if current != Some(color) {
                    writer.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl SceneBackend for ZoneStripRenderer {
    fn apply_rotation(&mut self, angles: Vector3<f32>) {
        self.angles = angles;
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() {
            return;
        }
        self.width = viewport.width as usize;
        self.height = viewport.height as usize;
        let size = self.width * self.height;
        self.char_buffer = vec![' '; size];
        self.color_buffer = vec![Color::Reset; size];
    }

    fn render(&mut self) {
        self.clear();
        self.rasterize_strip();
        self.rasterize_label();
        self.rasterize_overlay_line();
    }
}

/// Pick a spinner frame for a rotation angle
fn spinner_glyph(angle: f32) -> char {
    let step = (angle.rem_euclid(PI) / (PI / SPINNER.len() as f32)) as usize;
    SPINNER[step.min(SPINNER.len() - 1)]
}
