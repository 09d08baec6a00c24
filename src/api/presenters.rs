//! Terminal renderers for countdown updates

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::presenter::{Presenter, RunningLabel, Update};

const BAR_WIDTH: usize = 20;

/// Human readable status lines, plus the terminal title as the window title
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
    set_title: bool,
    use_color: bool,
    accent: Option<(u8, u8, u8)>,
    mode_label: String,
    display_text: String,
    fraction: f64,
    running: RunningLabel,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, set_title: bool, use_color: bool) -> Self {
        Self {
            out,
            set_title,
            use_color,
            accent: None,
            mode_label: String::new(),
            display_text: String::new(),
            fraction: 1.0,
            running: RunningLabel::Start,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn status_line(&self) -> String {
        let filled = (self.fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
        let bar = match self.accent {
            Some((r, g, b)) if self.use_color => {
                format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, bar)
            }
            _ => bar,
        };
        format!(
            "[{}] {} [{}] {:>3}% ({})",
            self.mode_label,
            self.display_text,
            bar,
            (self.fraction * 100.0).round() as u32,
            self.running.as_str()
        )
    }

    fn write_update(&mut self, update: Update) -> io::Result<()> {
        match update {
            Update::Time {
                display_text,
                window_title,
            } => {
                self.display_text = display_text;
                if self.set_title {
                    // OSC 0: set icon name and window title
                    write!(self.out, "\x1b]0;{}\x07", window_title)?;
                }
            }
            Update::Progress { fraction } => {
                self.fraction = fraction;
                writeln!(self.out, "{}", self.status_line())?;
            }
            Update::Running { label } => {
                self.running = label;
                writeln!(self.out, "{}", self.status_line())?;
            }
            Update::Mode {
                label,
                accent_color,
                ..
            } => {
                self.mode_label = label;
                self.accent = parse_hex_color(&accent_color);
                if self.accent.is_none() {
                    warn!("Accent color {:?} is not #rrggbb, rendering uncolored", accent_color);
                }
            }
            Update::Finished { .. } => {
                writeln!(self.out, "{} complete!", self.mode_label)?;
            }
        }
        self.out.flush()
    }
}

/// Parse a `#rrggbb` token into its channels
pub fn parse_hex_color(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, update: Update) {
        if let Err(e) = self.write_update(update) {
            warn!("Failed to write status line: {}", e);
        }
    }
}

/// One JSON document per line
#[derive(Debug, Clone, Serialize)]
pub struct UpdateFrame {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub update: Update,
}

impl UpdateFrame {
    pub fn new(update: Update) -> Self {
        Self {
            timestamp: Utc::now(),
            update,
        }
    }
}

/// Machine readable output for scripts and status bars
#[derive(Debug)]
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &UpdateFrame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, update: Update) {
        if let Err(e) = self.write_frame(&UpdateFrame::new(update)) {
            warn!("Failed to write update frame: {}", e);
        }
    }
}
