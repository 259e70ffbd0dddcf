//! Cycling headline text.
//!
//! The machine itself is pure: [`Typewriter::step`] advances one character and
//! reports how long to wait before the next step. The `TypewriterHeader`
//! component owns the timer.

use std::time::Duration;

/// Delays driving the typewriter, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// How long a fully typed phrase stays on screen
    pub pause_ms: u64,
}

impl TypewriterTiming {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    timing: TypewriterTiming,
    index: usize,
    /// Number of characters of the current phrase on screen
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// Text currently on screen.
    pub fn visible(&self) -> &'static str {
        let phrase = self.current();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advance by one character and return the delay before the next step.
    pub fn step(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return self.timing.pause();
        }

        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    self.timing.pause()
                } else {
                    self.timing.type_delay()
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.timing.type_delay()
                } else {
                    self.timing.delete_delay()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: TypewriterTiming = TypewriterTiming {
        type_delay_ms: 80,
        delete_delay_ms: 50,
        pause_ms: 1500,
    };

    #[test]
    fn test_starts_empty() {
        let tw = Typewriter::new(&["abc"], TIMING);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_types_then_pauses_then_deletes() {
        let mut tw = Typewriter::new(&["abc", "xy"], TIMING);

        assert_eq!(tw.step(), Duration::from_millis(80));
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.step(), Duration::from_millis(80));
        assert_eq!(tw.visible(), "ab");
        // Full phrase is held for the pause
        assert_eq!(tw.step(), Duration::from_millis(1500));
        assert_eq!(tw.visible(), "abc");
        assert_eq!(tw.phase(), Phase::Deleting);

        assert_eq!(tw.step(), Duration::from_millis(50));
        assert_eq!(tw.visible(), "ab");
        assert_eq!(tw.step(), Duration::from_millis(50));
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.step(), Duration::from_millis(80));
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);

        tw.step();
        assert_eq!(tw.visible(), "x");
    }

    #[test]
    fn test_loops_back_to_first_phrase() {
        let mut tw = Typewriter::new(&["a", "b"], TIMING);
        let mut seen = Vec::new();
        for _ in 0..8 {
            tw.step();
            if tw.phase() == Phase::Deleting && !tw.visible().is_empty() {
                seen.push(tw.visible());
            }
        }
        assert_eq!(seen, vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = Typewriter::new(&["né"], TIMING);
        tw.step();
        assert_eq!(tw.visible(), "n");
        tw.step();
        assert_eq!(tw.visible(), "né");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(&[], TIMING);
        assert_eq!(tw.step(), Duration::from_millis(1500));
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_site_phrases_cycle_in_order() {
        let phrases = crate::config::SITE.headline_phrases;
        let mut tw = Typewriter::new(phrases, crate::config::SITE.typewriter);
        let mut completed = Vec::new();
        while completed.len() < phrases.len() + 1 {
            let delay = tw.step();
            if delay == crate::config::SITE.typewriter.pause() {
                completed.push(tw.visible());
            }
        }
        assert_eq!(&completed[..phrases.len()], phrases);
        assert_eq!(completed[phrases.len()], phrases[0]);
    }
}
