use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("`{selector}` is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl EffectError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn unexpected(selector: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedElement {
            selector: selector.into(),
            expected,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn js(context: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        assert_eq!(
            EffectError::missing("#hero").to_string(),
            "no element matches `#hero`"
        );
        assert_eq!(
            EffectError::unexpected("#contact-form", "form").to_string(),
            "`#contact-form` is not a form"
        );
    }
}
