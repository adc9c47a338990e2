use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc, time::Duration};
use yew::prelude::*;

use super::dom::timeout_millis;
use crate::config::EffectsConfig;
use crate::content::TYPING_PHRASES;
use crate::effects::typewriter::Typewriter;
use crate::telemetry::{log_event, LogLevel};

type PendingKeystroke = Rc<RefCell<Option<Timeout>>>;

fn schedule_keystroke(
    typewriter: Rc<RefCell<Typewriter>>,
    text: UseStateHandle<AttrValue>,
    pending: PendingKeystroke,
    delay: Duration,
) {
    let next_pending = pending.clone();
    let timeout = Timeout::new(timeout_millis(delay), move || {
        let keystroke = typewriter.borrow_mut().tick();
        text.set(AttrValue::from(keystroke.text));
        schedule_keystroke(typewriter, text, next_pending, keystroke.delay);
    });

    *pending.borrow_mut() = Some(timeout);
}

#[function_component(TypingText)]
pub fn typing_text() -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let text = use_state(|| AttrValue::from(""));

    {
        let text = text.clone();
        use_effect_with((), move |_| {
            let typewriter = Typewriter::new(TYPING_PHRASES, config.typing.clone());
            let start_delay = typewriter.start_delay();
            let pending: PendingKeystroke = Rc::new(RefCell::new(None));

            schedule_keystroke(
                Rc::new(RefCell::new(typewriter)),
                text,
                pending.clone(),
                start_delay,
            );
            log_event(
                &config,
                LogLevel::Debug,
                "typewriter_started",
                serde_json::json!({
                    "phrases": TYPING_PHRASES.len(),
                    "start_delay_ms": start_delay.as_millis() as u64,
                }),
            );

            move || {
                pending.borrow_mut().take();
            }
        });
    }

    html! {
        <span id="typing-text" class="typing-text">{(*text).clone()}</span>
    }
}
