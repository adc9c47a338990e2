mod contact_form;
mod dom;
mod glow;
mod navbar;
mod particles;
mod reveal;
mod sections;
mod typing;

use web_sys::window;
use yew::prelude::*;

use crate::config::EffectsConfig;
use crate::content::{OWNER_NAME, SKIP_LINK_TARGET, WELCOME_MESSAGES};
use crate::telemetry::{log_event, LogLevel};
use glow::CursorGlowLayer;
use navbar::{AnchorLink, Navbar};
use particles::ParticleOverlay;
use reveal::use_reveal_on_scroll;
use sections::{About, Contact, Experience, Hero, Projects};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: EffectsConfig,
}

#[function_component(Page)]
fn page() -> Html {
    use_reveal_on_scroll();

    html! {
        <>
            <AnchorLink class="skip-link" section_id={SKIP_LINK_TARGET} label="Skip to main content" />
            <Navbar />
            <main id="content">
                <Hero />
                <About />
                <Projects />
                <Experience />
                <Contact />
            </main>
            <footer class="site-footer">
                <p class="muted">{format!("{OWNER_NAME} · Built with Rust and WebAssembly")}</p>
            </footer>
        </>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let reduced_motion = *use_memo((), |_| dom::prefers_reduced_motion());

    {
        let config = props.config.clone();
        use_effect_with(reduced_motion, move |reduced_motion| {
            if *reduced_motion {
                log_event(
                    &config,
                    LogLevel::Info,
                    "reduced_motion_detected",
                    serde_json::json!({ "skipped": ["particles", "cursor_glow"] }),
                );
            }
            || ()
        });
    }

    html! {
        <ContextProvider<EffectsConfig> context={props.config.clone()}>
            <Page />
            if !reduced_motion {
                <>
                    <ParticleOverlay />
                    <CursorGlowLayer />
                </>
            }
        </ContextProvider<EffectsConfig>>
    }
}

fn console_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = EffectsConfig::from_lookup(|key| root.get_attribute(&format!("data-{key}")));
    console_log::init_with_level(console_level(config.log_level)).ok();

    log_event(
        &config,
        LogLevel::Info,
        "app_started",
        serde_json::json!({
            "log_level": config.log_level.as_str(),
            "particle_capacity": config.particles.capacity,
            "scroll_threshold": config.nav.scrolled_threshold,
        }),
    );
    for message in WELCOME_MESSAGES {
        log_event(&config, LogLevel::Info, "welcome", serde_json::json!({ "message": message }));
    }

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
