//! Terminal host for the pointer-zone overlay
//!
//! Mouse motion over the terminal drives the zone selector, losing focus ends
//! the pointer session, and a spinner stands in for the rotating pyramid.
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info};
use pz3d_core::{ConfigurationError, FrameLoop, OverlayDriver, SceneConfig, Viewport};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;
pub mod sink;

pub use renderer::ZoneStripRenderer;
pub use sink::StripSink;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

/// Main application struct for the terminal overlay demo
pub struct TerminalApp {
    overlay: OverlayDriver<String, StripSink>,
    frames: FrameLoop<ZoneStripRenderer>,
    running: bool,
    frame_time: Duration,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: &SceneConfig, target_fps: u32) -> Result<Self, TerminalError> {
        let (width, height) = terminal::size()?;
        Self::with_size(config, target_fps, width, height)
    }

    /// Build the app for a fixed terminal size without touching the terminal.
    pub fn with_size(
        config: &SceneConfig,
        target_fps: u32,
        width: u16,
        height: u16,
    ) -> Result<Self, TerminalError> {
        let selector = config.selector()?;
        let layout = selector.layout();
        let viewport = Viewport::new(width as f32, height as f32);

        let renderer = ZoneStripRenderer::new(
            width as usize,
            height as usize,
            layout,
            config.label.text.clone(),
        );

        Ok(Self {
            overlay: OverlayDriver::new(selector, StripSink::new(), viewport),
            frames: FrameLoop::new(config.spin(), renderer),
            running: true,
            frame_time: Duration::from_millis(1000 / u64::from(target_fps.max(1))),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), TerminalError> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }

        let result = self.main_loop();

        // Cleanup runs every step even if an earlier one failed
        let restored = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let raw_off = terminal::disable_raw_mode();

        first_failure(result, [restored, raw_off])
    }

    fn main_loop(&mut self) -> Result<(), TerminalError> {
        info!(
            "overlay running with {} zones",
            self.overlay.selector().zone_count()
        );

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Route one terminal event to the overlay or the frame loop.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Left => self.frames.spin_mut().nudge(0.0, -0.1, 0.0),
                KeyCode::Right => self.frames.spin_mut().nudge(0.0, 0.1, 0.0),
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                    self.overlay.pointer_moved(column as f32, row as f32);
                }
                _ => {}
            },
            Event::FocusLost => {
                self.overlay.session_ended();
            }
            Event::Resize(width, height) => {
                debug!("terminal resized to {}x{}", width, height);
                let viewport = Viewport::new(width as f32, height as f32);
                self.overlay.resize(viewport);
                self.frames.resize(viewport);
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let sink = self.overlay.sink();
        let overlay = sink
            .visible_zone()
            .zip(sink.resource().map(str::to_string));
        self.frames.backend_mut().set_overlay(overlay);
        self.frames.frame();

        let mut stdout = stdout();
        self.frames.backend().draw(&mut stdout)?;

        let angles = self.frames.spin().angles;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "PZ3D Terminal | FPS: {:.1} | spin x={:.2} y={:.2} | Move mouse over zones, Left/Right=Nudge Q=Quit",
                self.fps, angles.x, angles.y
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn overlay(&self) -> &OverlayDriver<String, StripSink> {
        &self.overlay
    }

    pub fn frames(&self) -> &FrameLoop<ZoneStripRenderer> {
        &self.frames
    }
}

/// The run result wins; otherwise the first failed cleanup step is reported.
fn first_failure(
    result: Result<(), TerminalError>,
    cleanup: [io::Result<()>; 2],
) -> Result<(), TerminalError> {
    result?;
    for step in cleanup {
        step?;
    }
    Ok(())
}
