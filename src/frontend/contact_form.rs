use gloo_timers::callback::Timeout;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use super::dom;
use crate::config::EffectsConfig;
use crate::content::SUBMIT_LABEL;
use crate::effects::contact::{ContactSubmission, SubmitFeedback};
use crate::error::EffectError;
use crate::telemetry::{log_event, LogLevel};

fn read_submission(form: &HtmlFormElement) -> Result<ContactSubmission, EffectError> {
    let data = FormData::new_with_form(form).map_err(|value| EffectError::js("FormData", value))?;
    Ok(ContactSubmission::from_fields(|name| data.get(name).as_string()))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<EffectsConfig>().unwrap_or_default();
    let feedback = use_state(|| SubmitFeedback::new(SUBMIT_LABEL));
    let revert_timer = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();

    {
        let revert_timer = revert_timer.clone();
        use_effect_with((), move |_| {
            move || {
                revert_timer.borrow_mut().take();
            }
        });
    }

    let onsubmit = {
        let feedback = feedback.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                dom::report_skipped(&config, "contact_form", &EffectError::missing("#contact-form"));
                return;
            };
            let submission = match read_submission(&form) {
                Ok(submission) => submission,
                Err(error) => {
                    dom::report_skipped(&config, "contact_form", &error);
                    return;
                }
            };

            log_event(
                &config,
                LogLevel::Info,
                "contact_form_submitted",
                serde_json::to_value(&submission).unwrap_or_default(),
            );

            form.reset();
            let (sent, revert_after) = (*feedback).submit(&config.contact);
            feedback.set(sent);

            let revert = feedback.clone();
            let timeout = Timeout::new(dom::timeout_millis(revert_after), move || {
                revert.set((*revert).reverted())
            });
            *revert_timer.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <form id="contact-form" class="contact-form" ref={form_ref} onsubmit={onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" name="name" autocomplete="name" required=true />
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" type="email" name="email" autocomplete="email" required=true />
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" name="message" rows="5" required=true />
            </div>
            <button class="btn btn-secondary submit-btn" type="submit" style={feedback.style()}>
                {feedback.label().to_string()}
            </button>
        </form>
    }
}
