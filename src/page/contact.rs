//! Contact form payload and two-stage delivery
//!
//! The form posts its fields as JSON to an Apps Script endpoint. A failed
//! primary attempt gets exactly one fallback attempt in `no-cors` mode,
//! whose response is opaque - reaching the network at all counts as
//! delivered there. No further retry policy exists.

use serde::Serialize;

/// Apps Script endpoint receiving submissions
pub const ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwcBmkVkRiqxMf8eEtpKTTJSBD6ptOgrdd2n4_phbiM2PpWU-GzcJgysuoBTZXhjUdB/exec";

/// Trimmed contact-form fields, serialized as the POST body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Build from raw field values, trimming surrounding whitespace
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// All three fields present after trimming
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Which attempt got the message out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRoute {
    Primary,
    NoCorsFallback,
}

/// Result of the two-attempt submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { via: DeliveryRoute },
    Failed,
}

/// Severity of a form status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

impl StatusKind {
    /// CSS class for the status element; empty clears both flavors
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Neutral => "",
            StatusKind::Success => "is-success",
            StatusKind::Error => "is-error",
        }
    }
}

/// A message for the form's status element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: &'static str,
}

impl FormStatus {
    pub fn incomplete() -> Self {
        Self {
            kind: StatusKind::Error,
            text: "Please fill in all fields before sending your message.",
        }
    }

    pub fn sending() -> Self {
        Self {
            kind: StatusKind::Neutral,
            text: "Sending your message...",
        }
    }

    pub fn sent() -> Self {
        Self {
            kind: StatusKind::Success,
            text: "Message sent successfully.",
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: StatusKind::Error,
            text: "We could not send your message right now. Please try again in a moment.",
        }
    }

    /// Status line for a finished submission
    pub fn for_outcome(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Delivered { .. } => Self::sent(),
            DeliveryOutcome::Failed => Self::failed(),
        }
    }
}

/// Submit the payload: primary CORS attempt, then one no-cors fallback.
#[cfg(target_arch = "wasm32")]
pub async fn submit(payload: &ContactPayload) -> DeliveryOutcome {
    use web_sys::RequestMode;

    let Ok(body) = serde_json::to_string(payload) else {
        return DeliveryOutcome::Failed;
    };

    match post(&body, RequestMode::Cors).await {
        Ok(response) if response.ok() => {
            return DeliveryOutcome::Delivered {
                via: DeliveryRoute::Primary,
            };
        }
        Ok(response) => {
            log::warn!(
                "Primary submission rejected ({}); retrying in no-cors mode",
                response.status()
            );
        }
        Err(_) => {
            log::warn!("Primary submission failed; retrying in no-cors mode");
        }
    }

    // The no-cors response is opaque: if the request went out, treat the
    // message as delivered.
    match post(&body, RequestMode::NoCors).await {
        Ok(_) => DeliveryOutcome::Delivered {
            via: DeliveryRoute::NoCorsFallback,
        },
        Err(_) => {
            log::error!("Fallback submission failed");
            DeliveryOutcome::Failed
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn post(
    body: &str,
    mode: web_sys::RequestMode,
) -> Result<web_sys::Response, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit};

    let headers = Headers::new()?;
    headers.set("Content-Type", "text/plain;charset=utf-8")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(mode);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(ENDPOINT, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    response.dyn_into::<web_sys::Response>()
}
