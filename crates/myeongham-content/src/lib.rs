//! Profile content for the myeongham portfolio card.

/// Block letters for the hero banner (7 lines tall, 6 chars wide).
const LETTER_H: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

const LETTER_A: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

const LETTER_R: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██ ██ ",
    "██  ██",
    "██  ██",
];

const LETTER_U: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Glyph rows for the banner name.
const NAME_GLYPHS: [[&str; 7]; 4] = [LETTER_H, LETTER_A, LETTER_R, LETTER_U];

/// Height of the banner in rows.
pub const BANNER_HEIGHT: usize = 7;

/// Build the large banner for the hero section.
pub fn name_banner() -> Vec<String> {
    (0..BANNER_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, glyph) in NAME_GLYPHS.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(glyph[row]);
            }
            line
        })
        .collect()
}

/// Subtitle phrases cycled by the typewriter.
pub const PHRASES: &[&str] = &[
    "A hobbyist developer.",
    "Game designer",
    "Where's my coffee??",
    "Digital Nomad",
];

/// One-line bio under the typewriter.
pub const INTRO: &str = "I make small games and odd tools wherever the wifi is good.";

/// Contact line at the bottom of the card column.
pub const CONTACT: &str = "github.com/haru  ·  haru@drifting.dev";

/// A single portfolio project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: &'static str,
}

/// Projects shown on the card, top to bottom.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Pixel Foundry",
        summary: "Weekend game-jam engine with a tiny tile editor.",
        tech: "rust · wgpu",
    },
    Project {
        title: "Bean Counter",
        summary: "Pour-over timer and coffee journal for the terminal.",
        tech: "rust · ratatui",
    },
    Project {
        title: "Waypoint",
        summary: "Offline city guides for nomads as static pages.",
        tech: "rust · axum",
    },
    Project {
        title: "Glyphboard",
        summary: "A shareable soundboard of chiptune stingers.",
        tech: "rust · cpal",
    },
];
