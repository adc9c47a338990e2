use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    AboutText,
    SkillsGrid,
    ProjectCard,
    SkillCategory,
    TimelineItem,
    ContactInfo,
    ContactForm,
}

impl RegionKind {
    pub const ALL: [RegionKind; 7] = [
        Self::AboutText,
        Self::SkillsGrid,
        Self::ProjectCard,
        Self::SkillCategory,
        Self::TimelineItem,
        Self::ContactInfo,
        Self::ContactForm,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Self::AboutText => ".about-text",
            Self::SkillsGrid => ".skills-grid",
            Self::ProjectCard => ".project-card",
            Self::SkillCategory => ".skill-category",
            Self::TimelineItem => ".timeline-item",
            Self::ContactInfo => ".contact-info",
            Self::ContactForm => ".contact-form",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboutText => "about_text",
            Self::SkillsGrid => "skills_grid",
            Self::ProjectCard => "project_card",
            Self::SkillCategory => "skill_category",
            Self::TimelineItem => "timeline_item",
            Self::ContactInfo => "contact_info",
            Self::ContactForm => "contact_form",
        }
    }

    pub fn is_batch(self) -> bool {
        self.stagger_step_ms().is_some()
    }

    pub fn fills_bars(self) -> bool {
        self == Self::SkillCategory
    }

    fn stagger_step_ms(self) -> Option<u64> {
        match self {
            Self::ProjectCard => Some(100),
            Self::SkillCategory => Some(150),
            Self::TimelineItem => Some(200),
            _ => None,
        }
    }
}

pub fn stagger_delay(kind: RegionKind, index: usize) -> Option<Duration> {
    kind.stagger_step_ms()
        .map(|step| Duration::from_millis(step * index as u64))
}

pub fn animation_delay_css(delay: Duration) -> String {
    format!("{}s", delay.as_secs_f64())
}

pub fn parse_progress(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0))
}

pub fn width_css(percent: f64) -> String {
    format!("{percent}%")
}

pub fn bar_style(percent: f64) -> String {
    format!("width: {};", width_css(percent))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

impl RegionId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn from_index(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Clone, Debug)]
struct Region {
    kind: RegionKind,
    batch_index: usize,
    revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub id: RegionId,
    pub kind: RegionKind,
    pub batch_index: usize,
    pub fill_bars: bool,
}

/// One-shot reveal latches for every watched region.
#[derive(Clone, Debug, Default)]
pub struct RevealController {
    regions: Vec<Region>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: RegionKind, batch_index: usize) -> RegionId {
        self.regions.push(Region {
            kind,
            batch_index,
            revealed: false,
        });
        RegionId(self.regions.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_revealed(&self, id: RegionId) -> bool {
        self.regions.get(id.0).is_some_and(|region| region.revealed)
    }

    pub fn all_revealed(&self) -> bool {
        self.regions.iter().all(|region| region.revealed)
    }

    pub fn on_intersection(&mut self, id: RegionId, intersecting: bool) -> Option<Reveal> {
        if !intersecting {
            return None;
        }

        let region = self.regions.get_mut(id.0)?;
        if region.revealed {
            return None;
        }
        region.revealed = true;

        Some(Reveal {
            id,
            kind: region.kind,
            batch_index: region.batch_index,
            fill_bars: region.kind.fills_bars(),
        })
    }

    // Used when the page could not be marked; the next intersection retries.
    pub fn rearm(&mut self, id: RegionId) {
        if let Some(region) = self.regions.get_mut(id.0) {
            region.revealed = false;
        }
    }
}
