use gloo_events::EventListener;
use std::cell::RefCell;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::config::EffectsConfig;
use crate::content::{NAV_LINKS, OWNER_NAME};
use crate::effects::scroll::{link_targets, ScrollTracker};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub section_id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let href = format!("#{}", props.section_id);

    let onclick = {
        let section_id = props.section_id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let tracker = ScrollTracker::new(config.nav.clone());
            let scrolled = dom::section_top(&section_id)
                .and_then(|top| dom::smooth_scroll_to(tracker.anchor_scroll_top(top)));

            if let Err(error) = scrolled {
                dom::report_skipped(&config, "anchor_scroll", &error);
            }
        })
    };

    html! {
        <a class={props.class.clone()} href={href} onclick={onclick}>{props.label.clone()}</a>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let tracker = RefCell::new(ScrollTracker::new(config.nav.clone()));
            let sync = move || {
                let update = tracker
                    .borrow_mut()
                    .on_scroll(dom::scroll_offset(), &dom::section_bounds());
                scrolled.set(update.scrolled);
                active.set(update.active);
            };
            sync();

            let listener = match dom::browser_window() {
                Ok(window) => Some(EventListener::new(&window, "scroll", move |_| sync())),
                Err(error) => {
                    dom::report_skipped(&config, "navbar", &error);
                    None
                }
            };

            move || drop(listener)
        });
    }

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <AnchorLink class="nav-logo" section_id="hero" label={OWNER_NAME} />
                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|link| {
                        let is_active = active
                            .as_deref()
                            .is_some_and(|section_id| link_targets(&link.href(), section_id));
                        html! {
                            <li key={link.section_id}>
                                <AnchorLink
                                    class={classes!(is_active.then_some("active"))}
                                    section_id={link.section_id}
                                    label={link.label}
                                />
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
