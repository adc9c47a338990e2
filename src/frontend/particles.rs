use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use rand::{rngs::SmallRng, SeedableRng};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::dom;
use crate::config::EffectsConfig;
use crate::effects::particles::{ParticleField, ParticleSurface, SpawnBand};
use crate::error::EffectError;
use crate::telemetry::{log_event, LogLevel};

const SPAWN_REGION_ID: &str = "hero";

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

impl ParticleSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        let _ = self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.fill();
    }
}

struct OverlayHandle {
    _resize: EventListener,
    _pointer: EventListener,
    frame: FrameSlot,
}

impl Drop for OverlayHandle {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

fn spawn_band() -> Result<SpawnBand, EffectError> {
    let region = dom::element_by_id::<Element>(SPAWN_REGION_ID, "element")?;
    let rect = region.get_bounding_client_rect();
    Ok(SpawnBand {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn fit_canvas(canvas: &HtmlCanvasElement, field: &RefCell<ParticleField>) {
    let (width, height) = dom::viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    field.borrow_mut().resize(width, height);
}

fn request_frame(field: Rc<RefCell<ParticleField>>, context: CanvasRenderingContext2d, slot: FrameSlot) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_timestamp| {
        let mut surface = context.clone();
        field.borrow_mut().frame(&mut surface);
        request_frame(field, context, next_slot);
    });

    *slot.borrow_mut() = Some(handle);
}

fn mount(canvas: HtmlCanvasElement, config: &EffectsConfig) -> Result<OverlayHandle, EffectError> {
    let context = canvas
        .get_context("2d")
        .map_err(|value| EffectError::js("getContext", value))?
        .ok_or_else(|| EffectError::unexpected("canvas.particle-overlay", "2d canvas"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| EffectError::unexpected("canvas.particle-overlay", "2d canvas"))?;

    let (width, height) = dom::viewport_size();
    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particles.capacity,
        width,
        height,
    )));
    fit_canvas(&canvas, &field);

    let window = dom::browser_window()?;
    let document = dom::document()?;

    let resize = {
        let field = field.clone();
        EventListener::new(&window, "resize", move |_| fit_canvas(&canvas, &field))
    };

    let pointer = {
        let field = field.clone();
        let mut rng = SmallRng::from_entropy();
        EventListener::new(&document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Ok(band) = spawn_band() else {
                return;
            };
            field.borrow_mut().spawn_at(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                band,
                &mut rng,
            );
        })
    };

    let frame: FrameSlot = Rc::new(RefCell::new(None));
    request_frame(field, context, frame.clone());

    log_event(
        config,
        LogLevel::Debug,
        "particle_overlay_mounted",
        serde_json::json!({
            "capacity": config.particles.capacity,
            "width": width,
            "height": height,
        }),
    );

    Ok(OverlayHandle {
        _resize: resize,
        _pointer: pointer,
        frame,
    })
}

#[function_component(ParticleOverlay)]
pub fn particle_overlay() -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let mounted = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or_else(|| EffectError::missing("canvas.particle-overlay"))
                .and_then(|canvas| mount(canvas, &config));
            let handle = match mounted {
                Ok(handle) => Some(handle),
                Err(error) => {
                    dom::report_skipped(&config, "particles", &error);
                    None
                }
            };

            move || drop(handle)
        });
    }

    html! {
        <canvas class="particle-overlay" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}
