use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom;
use crate::config::EffectsConfig;
use crate::effects::reveal::{
    animation_delay_css, parse_progress, stagger_delay, width_css, RegionId, RegionKind,
    RevealController,
};
use crate::error::EffectError;
use crate::telemetry::{log_event, LogLevel};

const REGION_ID_ATTRIBUTE: &str = "data-reveal-id";
const PROGRESS_BAR_SELECTOR: &str = ".skill-progress-bar";
const REVEALED_CLASS: &str = "animate";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    _pending_fills: Rc<RefCell<Vec<Timeout>>>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reset_progress_bars() -> Result<(), EffectError> {
    for bar in dom::query_all(PROGRESS_BAR_SELECTOR)? {
        dom::set_style(&bar, "width", "0%")?;
    }
    Ok(())
}

fn collect_regions(controller: &mut RevealController) -> Result<Vec<HtmlElement>, EffectError> {
    let mut targets = Vec::new();

    for kind in RegionKind::ALL {
        let elements = if kind.is_batch() {
            dom::query_all(kind.selector())?
        } else {
            dom::query_first(kind.selector())?.into_iter().collect()
        };

        for (index, element) in elements.into_iter().enumerate() {
            if let Some(delay) = stagger_delay(kind, index) {
                dom::set_style(&element, "animation-delay", &animation_delay_css(delay))?;
            }
            let id = controller.register(kind, index);
            element
                .set_attribute(REGION_ID_ATTRIBUTE, &id.index().to_string())
                .map_err(|value| EffectError::js("setAttribute", value))?;
            targets.push(element);
        }
    }

    Ok(targets)
}

fn region_id(target: &Element) -> Option<RegionId> {
    target
        .get_attribute(REGION_ID_ATTRIBUTE)?
        .parse::<usize>()
        .ok()
        .map(RegionId::from_index)
}

fn fill_progress_bars(config: &EffectsConfig, category: &Element) {
    let bars = match dom::query_all_in(category, PROGRESS_BAR_SELECTOR) {
        Ok(bars) => bars,
        Err(error) => {
            dom::report_skipped(config, "skill_bars", &error);
            return;
        }
    };

    for bar in bars {
        let Some(percent) = bar
            .get_attribute("data-progress")
            .and_then(|raw| parse_progress(&raw))
        else {
            continue;
        };
        if let Err(error) = dom::set_style(&bar, "width", &width_css(percent)) {
            dom::report_skipped(config, "skill_bars", &error);
        }
    }
}

fn mark_revealed(target: &Element) -> Result<(), EffectError> {
    target
        .class_list()
        .add_1(REVEALED_CLASS)
        .map_err(|value| EffectError::js("classList.add", value))
}

// Shows every region at once when the observer cannot run; the stylesheet
// keeps them hidden until they carry the revealed class.
fn reveal_everything(config: &EffectsConfig) {
    for kind in RegionKind::ALL {
        let elements = match dom::query_all(kind.selector()) {
            Ok(elements) => elements,
            Err(error) => {
                dom::report_skipped(config, "reveal_fallback", &error);
                continue;
            }
        };

        for element in elements {
            if let Err(error) = mark_revealed(&element) {
                dom::report_skipped(config, "reveal_fallback", &error);
            }
            if kind.fills_bars() {
                fill_progress_bars(config, &element);
            }
        }
    }
}

fn install(config: &EffectsConfig) -> Result<Option<RevealObserver>, EffectError> {
    let mut controller = RevealController::new();
    let targets = collect_regions(&mut controller)?;
    if targets.is_empty() {
        return Ok(None);
    }

    let controller = Rc::new(RefCell::new(controller));
    let pending_fills: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

    let callback: ObserverCallback = {
        let config = config.clone();
        let pending_fills = pending_fills.clone();
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = region_id(&target) else {
                    continue;
                };
                let Some(reveal) = controller
                    .borrow_mut()
                    .on_intersection(id, entry.is_intersecting())
                else {
                    continue;
                };

                if let Err(error) = mark_revealed(&target) {
                    controller.borrow_mut().rearm(id);
                    dom::report_skipped(&config, "reveal", &error);
                    continue;
                }
                observer.unobserve(&target);

                if reveal.fill_bars {
                    let category = target.clone();
                    let fill_config = config.clone();
                    let timeout = Timeout::new(
                        dom::timeout_millis(config.reveal.bar_fill_delay),
                        move || fill_progress_bars(&fill_config, &category),
                    );
                    pending_fills.borrow_mut().push(timeout);
                }

                log_event(
                    &config,
                    LogLevel::Debug,
                    "region_revealed",
                    serde_json::json!({
                        "region": reveal.id.index(),
                        "kind": reveal.kind.as_str(),
                        "batch_index": reveal.batch_index,
                    }),
                );
            }

            if controller.borrow().all_revealed() {
                observer.disconnect();
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|value| EffectError::js("IntersectionObserver", value))?;
    reset_progress_bars()?;
    for target in &targets {
        observer.observe(target);
    }

    log_event(
        config,
        LogLevel::Info,
        "reveal_observer_installed",
        serde_json::json!({ "regions": targets.len() }),
    );

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
        _pending_fills: pending_fills,
    }))
}

#[hook]
pub fn use_reveal_on_scroll() {
    let config = use_context::<EffectsConfig>().unwrap_or_default();

    use_effect_with((), move |_| {
        let observer = install(&config).unwrap_or_else(|error| {
            dom::report_skipped(&config, "reveal", &error);
            reveal_everything(&config);
            None
        });

        move || drop(observer)
    });
}
