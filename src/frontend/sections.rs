use yew::prelude::*;

use super::contact_form::ContactForm;
use super::navbar::AnchorLink;
use super::typing::TypingText;
use crate::content::{
    ABOUT_PARAGRAPHS, CONTACT_DETAILS, OWNER_NAME, PROJECTS, SKILL_CATEGORIES, TIMELINE,
};
use crate::effects::reveal::bar_style;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero" aria-labelledby="hero-heading">
            <div class="hero-content">
                <p class="hero-greeting">{"Hi, I'm"}</p>
                <h1 id="hero-heading" class="hero-title">{OWNER_NAME}</h1>
                <p class="hero-subtitle">
                    <TypingText />
                    <span class="typing-cursor" aria-hidden="true">{"|"}</span>
                </p>
                <div class="hero-actions">
                    <AnchorLink class="btn btn-primary" section_id="projects" label="View Projects" />
                    <AnchorLink class="btn btn-secondary" section_id="contact" label="Get in Touch" />
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about" aria-labelledby="about-heading">
            <h2 id="about-heading" class="section-title">{"About Me"}</h2>
            <div class="about-content">
                <div class="about-text">
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>
                <div class="skills-grid">
                    { for SKILL_CATEGORIES.iter().map(|category| html! {
                        <div class="skill-category" key={category.title}>
                            <h3>{category.title}</h3>
                            { for category.skills.iter().map(|skill| html! {
                                <div class="skill-item" key={skill.name}>
                                    <div class="skill-header">
                                        <span>{skill.name}</span>
                                        <span class="muted">{format!("{}%", skill.progress)}</span>
                                    </div>
                                    <div class="skill-progress">
                                        <div
                                            class="skill-progress-bar"
                                            style={bar_style(0.0)}
                                            data-progress={skill.progress.to_string()}
                                        ></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="section projects" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="section-title">{"Projects"}</h2>
            <div class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article class="project-card" key={project.title}>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <ul class="project-tags">
                            { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                        </ul>
                        <a
                            class="project-link"
                            href={project.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Source"}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <section id="experience" class="section experience" aria-labelledby="experience-heading">
            <h2 id="experience-heading" class="section-title">{"Experience"}</h2>
            <ol class="timeline">
                { for TIMELINE.iter().map(|entry| html! {
                    <li class="timeline-item" key={entry.period}>
                        <p class="timeline-period">{entry.period}</p>
                        <h3>{entry.role}</h3>
                        <p class="timeline-organization">{entry.organization}</p>
                        <p>{entry.summary}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section contact" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-title">{"Get in Touch"}</h2>
            <div class="contact-content">
                <div class="contact-info">
                    <p>{"Have a project in mind or a backend that needs untangling? Send a note."}</p>
                    <ul class="contact-details">
                        { for CONTACT_DETAILS.iter().map(|detail| html! {
                            <li key={detail.label}>
                                <span class="muted">{detail.label}</span>
                                <a href={detail.href}>{detail.value}</a>
                            </li>
                        }) }
                    </ul>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
