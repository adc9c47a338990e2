pub const OWNER_NAME: &str = "Daniel Okafor";

pub const TYPING_PHRASES: [&str; 4] = [
    "Python & Django Developer",
    "Backend Specialist",
    "API Architect",
    "Full-Stack Developer",
];

pub struct NavLink {
    pub section_id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { section_id: "hero", label: "Home" },
    NavLink { section_id: "about", label: "About" },
    NavLink { section_id: "projects", label: "Projects" },
    NavLink { section_id: "experience", label: "Experience" },
    NavLink { section_id: "contact", label: "Contact" },
];

pub const SKIP_LINK_TARGET: &str = "about";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Backend engineer focused on Python and Django, building APIs that stay fast and boring under load.",
    "I care about clear data models, predictable deployments, and documentation that the next person actually reads.",
];

pub struct Skill {
    pub name: &'static str,
    pub progress: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Python", progress: 95 },
            Skill { name: "Django", progress: 90 },
            Skill { name: "Django REST Framework", progress: 88 },
        ],
    },
    SkillCategory {
        title: "Data",
        skills: &[
            Skill { name: "PostgreSQL", progress: 85 },
            Skill { name: "Redis", progress: 75 },
            Skill { name: "Celery", progress: 80 },
        ],
    },
    SkillCategory {
        title: "Delivery",
        skills: &[
            Skill { name: "Docker", progress: 82 },
            Skill { name: "CI/CD", progress: 78 },
            Skill { name: "JavaScript", progress: 70 },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Ledgerline",
        description: "Multi-tenant invoicing API with audit trails and idempotent payment webhooks.",
        tags: &["Django", "PostgreSQL", "Stripe"],
        href: "https://github.com/",
    },
    Project {
        title: "Queueboard",
        description: "Operations dashboard for Celery workers with live retry and dead-letter views.",
        tags: &["Celery", "Redis", "HTMX"],
        href: "https://github.com/",
    },
    Project {
        title: "Atlas Search",
        description: "Full-text catalogue search with faceting backed by PostgreSQL tsvector indexes.",
        tags: &["Python", "PostgreSQL", "REST"],
        href: "https://github.com/",
    },
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2023 – Present",
        role: "Senior Backend Engineer",
        organization: "Northwind Labs",
        summary: "Own the public API platform and its versioning policy.",
    },
    TimelineEntry {
        period: "2020 – 2023",
        role: "Backend Developer",
        organization: "Brightpath",
        summary: "Moved a Django monolith onto background workers and cut p95 latency in half.",
    },
    TimelineEntry {
        period: "2018 – 2020",
        role: "Junior Developer",
        organization: "Studio Kiln",
        summary: "Built client sites and their first REST integrations.",
    },
];

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
    ContactDetail {
        label: "GitHub",
        value: "github.com",
        href: "https://github.com/",
    },
    ContactDetail {
        label: "LinkedIn",
        value: "linkedin.com",
        href: "https://www.linkedin.com/",
    },
];

pub const SUBMIT_LABEL: &str = "Send Message";

pub const WELCOME_MESSAGES: [&str; 3] = [
    "Hello, Developer!",
    "Welcome to my portfolio. Feel free to explore the code!",
    "Looking for a Python/Django developer? Let's connect!",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_link_lands_on_a_navigable_section() {
        assert!(NAV_LINKS
            .iter()
            .any(|link| link.section_id == SKIP_LINK_TARGET));
        assert_eq!(NAV_LINKS[1].href(), format!("#{SKIP_LINK_TARGET}"));
    }

    #[test]
    fn skill_progress_stays_within_percent_range() {
        for category in &SKILL_CATEGORIES {
            assert!(category.skills.iter().all(|skill| skill.progress <= 100));
        }
    }
}
