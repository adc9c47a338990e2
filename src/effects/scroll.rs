use crate::config::NavConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub scrolled: bool,
    pub active: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    config: NavConfig,
    last_offset: f64,
    active: Option<String>,
}

impl ScrollTracker {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            last_offset: 0.0,
            active: None,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.config.scrolled_threshold
    }

    pub fn active_section<'a>(&self, sections: &'a [SectionBounds], offset: f64) -> Option<&'a str> {
        let point = offset + self.config.active_offset;
        sections
            .iter()
            .find(|section| section.contains(point))
            .map(|section| section.id.as_str())
    }

    // No containing section (the footer, say) keeps the previous highlight.
    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBounds]) -> ScrollUpdate {
        self.last_offset = offset;
        if let Some(active) = self.active_section(sections, offset) {
            self.active = Some(active.to_string());
        }

        ScrollUpdate {
            scrolled: self.is_scrolled(offset),
            active: self.active.clone(),
        }
    }

    pub fn anchor_scroll_top(&self, section_top: f64) -> f64 {
        (section_top - self.config.anchor_offset).max(0.0)
    }
}

pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}
