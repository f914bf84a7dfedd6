use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use myeongham_background::PolygonField;
use myeongham_config::Config;
use myeongham_content as content;
use myeongham_core::{BackgroundMode, ColorTheme, SplitMix64};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::Stylize,
    symbols::Marker,
    text::Line,
    widgets::{Paragraph, canvas::Canvas},
};

mod reveal;
mod typewriter;
mod ui;

use reveal::RevealTracker;
use typewriter::Typewriter;

/// Virtual background pixels per terminal column.
const PX_PER_COL: f64 = 10.0;

/// Virtual background pixels per terminal row.
const PX_PER_ROW: f64 = 20.0;

/// Target interval between animation frames (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(config, size.width, size.height).run(terminal)
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current accent theme.
    theme: ColorTheme,
    /// Current background mode.
    background: BackgroundMode,
    /// Randomness for the polygon field.
    rng: SplitMix64,
    /// Ambient polygon field.
    field: PolygonField,
    /// When the field last advanced.
    last_frame: Instant,
    /// Subtitle typewriter.
    typewriter: Typewriter,
    /// One-shot deadline for the next typewriter step. `None` once the
    /// typewriter has reported itself inert.
    type_deadline: Option<Instant>,
    /// Permanent card reveal marks.
    reveal: RevealTracker,
    /// Scroll offset into the card document, in rows.
    scroll: usize,
    /// Largest valid scroll offset, updated from the last layout.
    max_scroll: usize,
}

impl App {
    /// Construct a new instance of [`App`] sized to the terminal.
    pub fn new(config: Config, cols: u16, rows: u16) -> Self {
        // Capture system time as seed for randomness.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut rng = SplitMix64::new(seed);
        let field = PolygonField::new(
            f64::from(cols) * PX_PER_COL,
            f64::from(rows) * PX_PER_ROW,
            &mut rng,
        );
        Self {
            running: false,
            theme: config.theme,
            background: config.background,
            rng,
            field,
            last_frame: Instant::now(),
            typewriter: Typewriter::new(
                content::PHRASES.iter().map(|p| (*p).to_string()).collect(),
            ),
            type_deadline: Some(Instant::now()),
            reveal: RevealTracker::new(content::PROJECTS.len()),
            scroll: 0,
            max_scroll: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            if self.background == BackgroundMode::Drift
                && self.last_frame.elapsed() >= FRAME_INTERVAL
            {
                self.field.tick(&mut self.rng);
                self.last_frame = Instant::now();
            }
            if let Some(deadline) = self.type_deadline
                && Instant::now() >= deadline
            {
                self.type_deadline = self.typewriter.step().map(|delay| Instant::now() + delay);
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let accent = self.theme.color();

        if self.background == BackgroundMode::Drift {
            let (width, height) = self.field.size();
            let canvas = Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([0.0, width])
                .y_bounds([0.0, height])
                .paint(|ctx| ctx.draw(&self.field));
            frame.render_widget(canvas, area);
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Card document
            Constraint::Length(1), // Help text
        ])
        .split(area);
        let column = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(ui::COLUMN_WIDTH.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(chunks[0])[1];

        let document = ui::build_document(&self.typewriter.text(), &self.reveal, accent);

        let view_height = column.height as usize;
        self.max_scroll = document.lines.len().saturating_sub(view_height);
        self.scroll = self.scroll.min(self.max_scroll);

        // Cards crossing the visibility threshold are marked now and render
        // revealed from the next frame on.
        for (index, card) in document.cards.iter().enumerate() {
            self.reveal.observe(
                index,
                reveal::visible_ratio(card.top, card.height, self.scroll, view_height),
            );
        }

        let body = Paragraph::new(document.lines)
            .alignment(Alignment::Center)
            .scroll((self.scroll as u16, 0));
        frame.render_widget(body, column);

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "j/k".bold().fg(accent),
            " scroll  ".dark_gray(),
            "b".bold().fg(accent),
            " background  ".dark_gray(),
            "c".bold().fg(accent),
            " theme  ".dark_gray(),
            Local::now().format("%a %H:%M").to_string().dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so the animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                Event::Mouse(_) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Resynchronize the background surface to the new terminal size.
    /// Entities are left in place; their own update logic recycles strays.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.field
            .resize(f64::from(cols) * PX_PER_COL, f64::from(rows) * PX_PER_ROW);
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-1),
            (_, KeyCode::PageDown) => self.scroll_by(8),
            (_, KeyCode::PageUp) => self.scroll_by(-8),
            (_, KeyCode::Char('g') | KeyCode::Home) => self.scroll = 0,
            (_, KeyCode::Char('G') | KeyCode::End) => self.scroll = self.max_scroll,
            (_, KeyCode::Char('b')) => self.background = self.background.toggle(),
            (_, KeyCode::Char('c')) => self.theme = self.theme.next(),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let scroll = self.scroll as i32 + delta;
        self.scroll = scroll.clamp(0, self.max_scroll as i32) as usize;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
