use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::EffectsConfig;
use crate::effects::scroll::SectionBounds;
use crate::error::EffectError;
use crate::telemetry::{log_event, LogLevel};

pub fn browser_window() -> Result<Window, EffectError> {
    window().ok_or_else(|| EffectError::missing("window"))
}

pub fn document() -> Result<Document, EffectError> {
    browser_window()?
        .document()
        .ok_or_else(|| EffectError::missing("document"))
}

pub fn element_by_id<T: JsCast>(id: &str, expected: &'static str) -> Result<T, EffectError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::missing(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| EffectError::unexpected(format!("#{id}"), expected))
}

pub fn query_first(selector: &str) -> Result<Option<HtmlElement>, EffectError> {
    let found = document()?
        .query_selector(selector)
        .map_err(|value| EffectError::js("querySelector", value))?;

    Ok(found.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, EffectError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|value| EffectError::js("querySelectorAll", value))?;

    Ok(html_elements(&list))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, EffectError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|value| EffectError::js("querySelectorAll", value))?;

    Ok(html_elements(&list))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), EffectError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|value| EffectError::js("style.setProperty", value))
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn section_bounds() -> Vec<SectionBounds> {
    query_all("section[id]")
        .unwrap_or_default()
        .into_iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

pub fn section_top(section_id: &str) -> Result<f64, EffectError> {
    let section = element_by_id::<HtmlElement>(section_id, "section")?;
    Ok(f64::from(section.offset_top()))
}

pub fn smooth_scroll_to(top: f64) -> Result<(), EffectError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    browser_window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

pub fn report_skipped(config: &EffectsConfig, effect: &str, error: &EffectError) {
    log_event(
        config,
        LogLevel::Info,
        "effect_skipped",
        serde_json::json!({
            "effect": effect,
            "reason": error.to_string(),
        }),
    );
}
