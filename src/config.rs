use std::time::Duration;

use crate::telemetry::LogLevel;

const DEFAULT_TYPE_DELAY_MS: u64 = 100;
const DEFAULT_DELETE_DELAY_MS: u64 = 50;
const DEFAULT_HOLD_DELAY_MS: u64 = 2_000;
const DEFAULT_NEXT_PHRASE_DELAY_MS: u64 = 500;
const DEFAULT_TYPING_START_DELAY_MS: u64 = 1_000;
const DEFAULT_SCROLLED_THRESHOLD: f64 = 100.0;
const DEFAULT_ACTIVE_SECTION_OFFSET: f64 = 150.0;
const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const DEFAULT_BAR_FILL_DELAY_MS: u64 = 300;
const DEFAULT_PARTICLE_CAPACITY: usize = 50;
const DEFAULT_FEEDBACK_DURATION_MS: u64 = 3_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const TYPE_DELAY_MS_BOUNDS: (u64, u64) = (10, 1_000);
const DELETE_DELAY_MS_BOUNDS: (u64, u64) = (10, 1_000);
const SCROLLED_THRESHOLD_BOUNDS: (u64, u64) = (0, 2_000);
const PARTICLE_CAPACITY_BOUNDS: (usize, usize) = (0, 500);
const FEEDBACK_DURATION_MS_BOUNDS: (u64, u64) = (500, 30_000);

#[derive(Clone, Debug, PartialEq)]
pub struct TypingConfig {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
    pub next_phrase_delay: Duration,
    pub start_delay: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
            hold_delay: Duration::from_millis(DEFAULT_HOLD_DELAY_MS),
            next_phrase_delay: Duration::from_millis(DEFAULT_NEXT_PHRASE_DELAY_MS),
            start_delay: Duration::from_millis(DEFAULT_TYPING_START_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub scrolled_threshold: f64,
    pub active_offset: f64,
    pub anchor_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            active_offset: DEFAULT_ACTIVE_SECTION_OFFSET,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub bar_fill_delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            bar_fill_delay: Duration::from_millis(DEFAULT_BAR_FILL_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub capacity: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_PARTICLE_CAPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactConfig {
    pub feedback_duration: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            feedback_duration: Duration::from_millis(DEFAULT_FEEDBACK_DURATION_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub typing: TypingConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub particles: ParticleConfig,
    pub contact: ContactConfig,
    pub log_level: LogLevel,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            particles: ParticleConfig::default(),
            contact: ContactConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EffectsConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let type_delay_ms = parse_u64_with_bounds(
            lookup("typing-speed-ms"),
            DEFAULT_TYPE_DELAY_MS,
            TYPE_DELAY_MS_BOUNDS,
        );
        let delete_delay_ms = parse_u64_with_bounds(
            lookup("deleting-speed-ms"),
            DEFAULT_DELETE_DELAY_MS,
            DELETE_DELAY_MS_BOUNDS,
        );
        let scrolled_threshold = parse_u64_with_bounds(
            lookup("scroll-threshold"),
            DEFAULT_SCROLLED_THRESHOLD as u64,
            SCROLLED_THRESHOLD_BOUNDS,
        );
        let capacity = parse_usize_with_bounds(
            lookup("particle-capacity"),
            DEFAULT_PARTICLE_CAPACITY,
            PARTICLE_CAPACITY_BOUNDS,
        );
        let feedback_ms = parse_u64_with_bounds(
            lookup("feedback-ms"),
            DEFAULT_FEEDBACK_DURATION_MS,
            FEEDBACK_DURATION_MS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("log-level"), DEFAULT_LOG_LEVEL);

        Self {
            typing: TypingConfig {
                type_delay: Duration::from_millis(type_delay_ms),
                delete_delay: Duration::from_millis(delete_delay_ms),
                ..defaults.typing
            },
            nav: NavConfig {
                scrolled_threshold: scrolled_threshold as f64,
                ..defaults.nav
            },
            reveal: defaults.reveal,
            particles: ParticleConfig { capacity },
            contact: ContactConfig {
                feedback_duration: Duration::from_millis(feedback_ms),
            },
            log_level,
        }
    }
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds(value: Option<String>, default: usize, bounds: (usize, usize)) -> usize {
    value
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_matches_defaults() {
        let config = EffectsConfig::from_lookup(|_| None);
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = EffectsConfig::from_lookup(lookup_from(&[
            ("typing-speed-ms", "120"),
            ("particle-capacity", " 80 "),
            ("log-level", "DEBUG"),
            ("feedback-ms", "1500"),
        ]));

        assert_eq!(config.typing.type_delay, Duration::from_millis(120));
        assert_eq!(config.typing.hold_delay, Duration::from_millis(DEFAULT_HOLD_DELAY_MS));
        assert_eq!(config.particles.capacity, 80);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.contact.feedback_duration, Duration::from_millis(1_500));
    }

    #[test]
    fn out_of_range_overrides_fall_back_to_defaults() {
        let config = EffectsConfig::from_lookup(lookup_from(&[
            ("typing-speed-ms", "5"),
            ("particle-capacity", "100000"),
            ("scroll-threshold", "-3"),
            ("log-level", "trace"),
        ]));

        assert_eq!(config.typing.type_delay, Duration::from_millis(DEFAULT_TYPE_DELAY_MS));
        assert_eq!(config.particles.capacity, DEFAULT_PARTICLE_CAPACITY);
        assert_eq!(config.nav.scrolled_threshold, DEFAULT_SCROLLED_THRESHOLD);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
