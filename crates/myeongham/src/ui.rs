//! Scrollable card document for the content column.

use myeongham_content as content;
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

use crate::reveal::RevealTracker;

/// Width of the centered content column in cells.
pub const COLUMN_WIDTH: u16 = 64;

/// Outer width of a project card in cells.
const CARD_WIDTH: usize = 56;

/// Inner text width of a project card.
const CARD_INNER: usize = CARD_WIDTH - 4;

/// Rows occupied by one project card.
pub const CARD_HEIGHT: usize = 5;

/// Row span of one card inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpan {
    pub top: usize,
    pub height: usize,
}

/// The rendered document plus the card geometry used for reveal
/// observation.
#[derive(Debug)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub cards: Vec<CardSpan>,
}

/// Build the full scrollable document: hero banner, typewriter subtitle,
/// and the project cards. Unrevealed cards keep their rows but render
/// blank so the layout never shifts.
pub fn build_document(typed: &str, reveal: &RevealTracker, accent: Color) -> Document {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::default());
    for row in content::name_banner() {
        lines.push(Line::from(row).style(Style::new().fg(accent).bold()));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(typed.to_string(), Style::new().fg(accent)),
        "▌".dark_gray(),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(content::INTRO).dark_gray());
    lines.push(Line::default());
    lines.push(Line::from("· · ·  projects  · · ·").dark_gray());
    lines.push(Line::default());

    let mut cards = Vec::with_capacity(content::PROJECTS.len());
    for (index, project) in content::PROJECTS.iter().enumerate() {
        cards.push(CardSpan {
            top: lines.len(),
            height: CARD_HEIGHT,
        });
        if reveal.is_revealed(index) {
            lines.extend(card_lines(project, accent));
        } else {
            lines.extend((0..CARD_HEIGHT).map(|_| Line::default()));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(content::CONTACT).dark_gray());
    lines.push(Line::default());

    Document { lines, cards }
}

/// Render one bordered project card.
fn card_lines(project: &content::Project, accent: Color) -> Vec<Line<'static>> {
    let horizontal = "─".repeat(CARD_WIDTH - 2);
    let framed = |text: String, style: Style| {
        Line::from(vec![
            "│ ".dark_gray(),
            Span::styled(format!("{text:<width$}", width = CARD_INNER), style),
            " │".dark_gray(),
        ])
    };
    vec![
        Line::from(format!("╭{horizontal}╮")).dark_gray(),
        framed(project.title.to_string(), Style::new().fg(accent).bold()),
        framed(project.summary.to_string(), Style::new()),
        framed(project.tech.to_string(), Style::new().dark_gray().italic()),
        Line::from(format!("╰{horizontal}╯")).dark_gray(),
    ]
}
