mod cli;
mod scheduler;
mod surface;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use pokbal_config::Config;
use pokbal_core::{MIN_SPACING, Theme};
use pokbal_field::{FieldError, FrameLoop, ParticleField, PixelCanvas, Surface};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::cli::Args;
use crate::scheduler::TickScheduler;
use crate::surface::TerminalSurface;

/// Rows reserved below the canvas for the status line.
const STATUS_ROWS: u16 = 1;

/// Largest spacing reachable with the `+` key.
const MAX_SPACING: f32 = 16.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config = args.resolve()?;

    let terminal = ratatui::init();
    let result = run(terminal, config, args.config);
    let released = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result?;
    released?;
    Ok(())
}

fn run(
    terminal: DefaultTerminal,
    config: Config,
    config_path: Option<PathBuf>,
) -> color_eyre::Result<()> {
    execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;
    App::new(config, config_path).run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Active configuration, saved with `s`.
    config: Config,
    /// Explicit config file from the command line.
    config_path: Option<PathBuf>,
    /// Particle simulation.
    field: ParticleField,
    /// Alternates physics steps and blits.
    frames: FrameLoop,
    scheduler: TickScheduler,
    surface: TerminalSurface,
    /// Transient message shown in the status line.
    message: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let field = ParticleField::new(config.theme.particle_color(), config.physics);
        let scheduler = TickScheduler::new(Duration::from_millis(config.frame_interval_ms));
        Self {
            running: false,
            config,
            config_path,
            field,
            frames: FrameLoop::new(),
            scheduler,
            surface: TerminalSurface::new(),
            message: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let (cols, rows) = crossterm::terminal::size()?;
        self.restart(cols, rows)?;
        while self.running {
            if self.scheduler.take_due() {
                self.frames
                    .on_frame(&mut self.field, &mut self.surface, &mut self.scheduler);
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.frames.stop(&mut self.scheduler);
        Ok(())
    }

    /// Stop the animation, rebuild the grid for the terminal size and start again.
    fn restart(&mut self, cols: u16, rows: u16) -> Result<(), FieldError> {
        self.frames.stop(&mut self.scheduler);
        self.surface.resize(cols, rows.saturating_sub(STATUS_ROWS));
        let (width, height) = self.surface.size();
        let margins = self.config.margin_style.margins(height as f32);
        self.field
            .initialize((width, height), self.config.spacing, margins)?;
        self.frames.start(&mut self.scheduler);
        Ok(())
    }

    /// Rebuild the grid at the current size.
    fn reinitialize(&mut self) -> Result<(), FieldError> {
        let (width, height) = self.surface.size();
        let rows = (height / 2) as u16 + STATUS_ROWS;
        self.restart(width as u16, rows)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let palette = self.config.theme.palette();
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(STATUS_ROWS)])
                .split(frame.area());

        frame.render_widget(
            PixelCanvas::new(self.surface.pixels(), palette.main),
            chunks[0],
        );

        let key = palette.contrast.to_color();
        let dim = palette.contrast_darker.to_color();
        let summary = self.message.clone().unwrap_or_else(|| {
            format!(
                "{} particles  spacing {}  {} margins  ",
                self.field.len(),
                self.config.spacing,
                self.config.margin_style.name()
            )
        });
        let status = Line::from(vec![
            format!(" {} ", self.config.theme.name()).bold().fg(key),
            summary.fg(dim),
            "q".bold().fg(key),
            " quit  ".fg(dim),
            "t".bold().fg(key),
            " theme  ".fg(dim),
            "m".bold().fg(key),
            " margins  ".fg(dim),
            "+/-".bold().fg(key),
            " spacing  ".fg(dim),
            "s".bold().fg(key),
            " save".fg(dim),
        ]);
        frame.render_widget(
            Paragraph::new(status).style(Style::new().bg(palette.main.to_color())),
            chunks[1],
        );
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.scheduler.timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.field.pointer_left(),
                Event::Resize(cols, rows) => self.restart(cols, rows)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> Result<(), FieldError> {
        self.message = None;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('l')) => self.set_theme(Theme::Light),
            (_, KeyCode::Char('d')) => self.set_theme(Theme::Dark),
            (_, KeyCode::Char('t')) => self.set_theme(self.config.theme.toggle()),
            (_, KeyCode::Char('m')) => {
                self.config.margin_style = self.config.margin_style.next();
                self.reinitialize()?;
            }
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => self.change_spacing(1.0)?,
            (_, KeyCode::Char('-')) => self.change_spacing(-1.0)?,
            (_, KeyCode::Char('s')) => self.save_config(),
            _ => {}
        }
        Ok(())
    }

    /// Steer the explosion with the mouse; the status row counts as outside.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }
        let (_, height) = self.surface.size();
        let y = mouse.row as f32 * 2.0 + 1.0;
        if y < height as f32 {
            self.field.pointer_moved(mouse.column as f32 + 0.5, y);
        } else {
            self.field.pointer_left();
        }
    }

    /// Switch theme, recolouring the particles from the next blit on.
    fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
        self.field.set_color(theme.particle_color());
    }

    fn change_spacing(&mut self, delta: f32) -> Result<(), FieldError> {
        let spacing = (self.config.spacing + delta).clamp(MIN_SPACING, MAX_SPACING);
        if spacing != self.config.spacing {
            self.config.spacing = spacing;
            self.reinitialize()?;
        }
        Ok(())
    }

    /// Write the current settings to the config file.
    fn save_config(&mut self) {
        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path).map(|()| path.clone()),
            None => self.config.save(),
        };
        self.message = Some(match saved {
            Ok(path) => format!("saved {}  ", path.display()),
            Err(e) => format!("{e}  "),
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
