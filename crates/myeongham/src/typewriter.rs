//! Typewriter animation for the subtitle line.

use std::time::Duration;

/// Delay after revealing one character.
const TYPE_DELAY: Duration = Duration::from_millis(150);

/// Delay after removing one character.
const DELETE_DELAY: Duration = Duration::from_millis(75);

/// Hold on the completed phrase before deleting starts.
const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Rest on the empty line before the next phrase starts.
const REST_DELAY: Duration = Duration::from_millis(500);

/// Character-by-character phrase cycler.
///
/// Each [`step`] performs one unit of work and returns the delay to wait
/// before the next step, so the caller re-arms a one-shot deadline rather
/// than running a fixed-interval timer. With no phrases to type, `step`
/// returns `None` and the cycler is permanently inert.
///
/// [`step`]: Typewriter::step
#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// The currently displayed text: a prefix of the current phrase.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase_index)
            .map(|phrase| phrase.chars().take(self.char_index).collect())
            .unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Advance one character in the current direction and return the delay
    /// before the next step, or `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<Duration> {
        let length = self
            .phrases
            .get(self.phrase_index)
            .map(|phrase| phrase.chars().count())?;

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index += 1;
        }

        let mut delay = if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        };

        if !self.deleting && self.char_index >= length {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay = REST_DELAY;
        }

        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| (*p).to_string()).collect())
    }

    #[test]
    fn test_text_is_always_a_prefix_of_the_current_phrase() {
        let mut tw = typewriter(&["hello", "hi"]);
        for _ in 0..100 {
            let phrase = ["hello", "hi"][tw.phrase_index()];
            let text = tw.text();
            assert!(phrase.starts_with(&text));
            tw.step().unwrap();
        }
    }

    #[test]
    fn test_one_full_cycle_advances_the_phrase_index() {
        let mut tw = typewriter(&["ab", "xyz"]);

        // Typing: one character per step at the typing delay.
        assert_eq!(tw.step(), Some(Duration::from_millis(150)));
        assert_eq!(tw.text(), "a");
        // Completing the phrase holds before deletion starts.
        assert_eq!(tw.step(), Some(Duration::from_millis(2000)));
        assert_eq!(tw.text(), "ab");
        // Deleting runs at the faster delay.
        assert_eq!(tw.step(), Some(Duration::from_millis(75)));
        assert_eq!(tw.text(), "a");
        // Emptying the line rests, then the next phrase is current.
        assert_eq!(tw.step(), Some(Duration::from_millis(500)));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn test_phrase_index_wraps_after_a_full_rotation() {
        let phrases = ["one", "two", "three"];
        let mut tw = typewriter(&phrases);
        // A rest delay marks the end of one type+delete pass.
        let mut rests = 0;
        while rests < phrases.len() {
            if tw.step() == Some(Duration::from_millis(500)) {
                rests += 1;
            }
        }
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.step(), None);
        assert_eq!(tw.step(), None);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_empty_phrase_does_not_wedge_the_cycle() {
        let mut tw = typewriter(&["", "ok"]);
        let mut reached = false;
        for _ in 0..8 {
            tw.step().unwrap();
            reached |= tw.phrase_index() == 1;
        }
        assert!(reached);
    }

    #[test]
    fn test_multibyte_phrases_step_per_character() {
        let mut tw = typewriter(&["명함"]);
        tw.step().unwrap();
        assert_eq!(tw.text(), "명");
        tw.step().unwrap();
        assert_eq!(tw.text(), "명함");
    }
}
