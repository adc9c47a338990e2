use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::config::EffectsConfig;
use crate::effects::glow::CursorGlow;
use crate::error::EffectError;

#[function_component(CursorGlowLayer)]
pub fn cursor_glow_layer() -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let glow = use_mut_ref(CursorGlow::default);
    let style = use_state_eq(|| glow.borrow().style());

    {
        let glow = glow.clone();
        let style = style.clone();
        use_effect_with((), move |_| {
            let listeners = dom::document().and_then(|document| {
                let root = document
                    .document_element()
                    .ok_or_else(|| EffectError::missing("html"))?;

                let on_move = {
                    let glow = glow.clone();
                    let style = style.clone();
                    EventListener::new(&document, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                        let next = glow.borrow().pointer_moved(x, y);
                        *glow.borrow_mut() = next;
                        style.set(next.style());
                    })
                };
                let on_leave = EventListener::new(&root, "mouseleave", move |_| {
                    let next = glow.borrow().pointer_left();
                    *glow.borrow_mut() = next;
                    style.set(next.style());
                });

                Ok([on_move, on_leave])
            });

            let listeners = match listeners {
                Ok(listeners) => Some(listeners),
                Err(error) => {
                    dom::report_skipped(&config, "cursor_glow", &error);
                    None
                }
            };

            move || drop(listeners)
        });
    }

    html! {
        <div class="cursor-glow" style={(*style).clone()} aria-hidden="true"></div>
    }
}
