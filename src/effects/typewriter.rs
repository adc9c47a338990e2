use std::time::Duration;

use crate::config::TypingConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub text: String,
    pub delay: Duration,
}

/// Types each phrase forward, holds, deletes it, and moves on to the next
/// phrase, wrapping after the last one.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_offset: usize,
    deleting: bool,
    config: TypingConfig,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypingConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_offset: 0,
            deleting: false,
            config,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn start_delay(&self) -> Duration {
        self.config.start_delay
    }

    pub fn tick(&mut self) -> Keystroke {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return Keystroke {
                text: String::new(),
                delay: self.config.hold_delay,
            };
        };
        let phrase_len = phrase.chars().count();

        if phrase_len == 0 {
            self.advance_phrase();
            return Keystroke {
                text: String::new(),
                delay: self.config.next_phrase_delay,
            };
        }

        let mut delay = if self.deleting {
            self.char_offset = self.char_offset.saturating_sub(1);
            self.config.delete_delay
        } else {
            self.char_offset = (self.char_offset + 1).min(phrase_len);
            self.config.type_delay
        };
        let text = phrase.chars().take(self.char_offset).collect();

        if !self.deleting && self.char_offset == phrase_len {
            delay = self.config.hold_delay;
            self.deleting = true;
        } else if self.deleting && self.char_offset == 0 {
            self.advance_phrase();
            delay = self.config.next_phrase_delay;
        }

        Keystroke { text, delay }
    }

    fn advance_phrase(&mut self) {
        self.deleting = false;
        self.char_offset = 0;
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut typewriter = Typewriter::new(["ab", "c"], TypingConfig::default());

        let steps: Vec<Keystroke> = (0..6).map(|_| typewriter.tick()).collect();
        let texts: Vec<&str> = steps.iter().map(|step| step.text.as_str()).collect();
        let delays: Vec<Duration> = steps.iter().map(|step| step.delay).collect();

        assert_eq!(texts, ["a", "ab", "a", "", "c", ""]);
        assert_eq!(delays, [ms(100), ms(2_000), ms(50), ms(500), ms(2_000), ms(500)]);
        assert_eq!(typewriter.phrase_index(), 0);
    }

    #[test]
    fn text_is_always_a_prefix_of_the_current_phrase() {
        let phrases = ["Python & Django Developer", "Backend Specialist", "API Architect"];
        let mut typewriter = Typewriter::new(phrases, TypingConfig::default());

        for _ in 0..500 {
            let index = typewriter.phrase_index();
            let step = typewriter.tick();
            let phrase = phrases[index];

            assert!(phrase.starts_with(&step.text));
            assert!(step.text.chars().count() <= phrase.chars().count());
        }
    }

    #[test]
    fn visits_phrases_in_order_and_wraps() {
        let phrases = ["one", "two", "three"];
        let mut typewriter = Typewriter::new(phrases, TypingConfig::default());
        let mut completed = Vec::new();

        for _ in 0..200 {
            let step = typewriter.tick();
            if step.delay == ms(2_000) {
                completed.push(step.text);
            }
        }

        assert!(completed.len() > phrases.len());
        for (position, text) in completed.iter().enumerate() {
            assert_eq!(text, phrases[position % phrases.len()]);
        }
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let mut typewriter = Typewriter::new(["✓é"], TypingConfig::default());

        assert_eq!(typewriter.tick().text, "✓");
        assert_eq!(typewriter.tick().text, "✓é");
        assert!(typewriter.is_deleting());
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut typewriter = Typewriter::new(Vec::<String>::new(), TypingConfig::default());
        let step = typewriter.tick();

        assert_eq!(step.text, "");
        assert_eq!(step.delay, ms(2_000));
    }

    #[test]
    fn empty_phrase_is_skipped() {
        let mut typewriter = Typewriter::new(["", "x"], TypingConfig::default());

        assert_eq!(typewriter.tick(), Keystroke { text: String::new(), delay: ms(500) });
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.tick().text, "x");
    }
}
