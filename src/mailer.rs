use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

// EmailJS routing identifiers. These are public client-side values, not
// secrets; the template on the service side decides where mail lands.
const SERVICE_ID: &str = "service_hsh800m";
const TEMPLATE_ID: &str = "template_uy1z7ad";
const PUBLIC_KEY: &str = "PVZtsh2XSyGROMtZI";
const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// How long a success or error banner stays up before the form returns
/// to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(5000);

/// The four fields of the contact form, bound to its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Submission lifecycle of the contact form. `Sending` doubles as the
/// in-flight flag that keeps the submit control disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("sending failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery service answered with status {0}")]
    Rejected(u16),
}

/// Wire payload for the delivery endpoint.
#[derive(Debug, Serialize)]
struct MessageRequest {
    service_id: &'static str,
    template_id: &'static str,
    user_id: &'static str,
    template_params: TemplateParams,
}

/// The delivery template names the subject field `title`.
#[derive(Debug, Serialize)]
struct TemplateParams {
    name: String,
    email: String,
    title: String,
    message: String,
}

impl MessageRequest {
    fn from_form(form: &ContactForm) -> Self {
        MessageRequest {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: PUBLIC_KEY,
            template_params: TemplateParams {
                name: form.name.clone(),
                email: form.email.clone(),
                title: form.subject.clone(),
                message: form.message.clone(),
            },
        }
    }
}

/// Send the drafted message through the delivery service. One request, no
/// retry; any non-2xx answer is an error. The response body is not used.
pub async fn send_message(form: &ContactForm) -> Result<(), SendError> {
    let response = reqwest::Client::new()
        .post(SEND_URL)
        .json(&MessageRequest::from_form(form))
        .send()
        .await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SendError::Rejected(status.as_u16()))
    }
}

/// Status the banner's reset timer returns the form to. A submission
/// already in flight is left alone, so a timer armed by an earlier
/// outcome can never re-enable the submit control mid-request.
pub fn reset_status(status: SubmitStatus) -> SubmitStatus {
    match status {
        SubmitStatus::Sending => SubmitStatus::Sending,
        _ => SubmitStatus::Idle,
    }
}

/// Fold a delivery outcome back into the draft: success clears the form,
/// failure leaves every field intact so the visitor can retry.
pub fn apply_submit_result(
    form: &mut ContactForm,
    result: &Result<(), SendError>,
) -> SubmitStatus {
    match result {
        Ok(()) => {
            form.clear();
            SubmitStatus::Success
        }
        Err(_) => SubmitStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Let's build something together.".to_string(),
        }
    }

    #[test]
    fn test_payload_relabels_subject_as_title() {
        let payload = serde_json::to_value(MessageRequest::from_form(&draft())).unwrap();
        assert_eq!(payload["template_params"]["title"], "Collaboration");
        assert!(payload["template_params"].get("subject").is_none());
    }

    #[test]
    fn test_payload_carries_routing_identifiers_and_fields() {
        let payload = serde_json::to_value(MessageRequest::from_form(&draft())).unwrap();
        assert_eq!(payload["service_id"], SERVICE_ID);
        assert_eq!(payload["template_id"], TEMPLATE_ID);
        assert_eq!(payload["user_id"], PUBLIC_KEY);
        assert_eq!(payload["template_params"]["name"], "Ada Lovelace");
        assert_eq!(payload["template_params"]["email"], "ada@example.com");
        assert_eq!(
            payload["template_params"]["message"],
            "Let's build something together."
        );
    }

    #[test]
    fn test_success_clears_the_draft() {
        let mut form = draft();
        let status = apply_submit_result(&mut form, &Ok(()));
        assert_eq!(status, SubmitStatus::Success);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failure_preserves_the_draft_for_retry() {
        let mut form = draft();
        let status = apply_submit_result(&mut form, &Err(SendError::Rejected(503)));
        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(form, draft());
    }

    #[test]
    fn test_banner_reset_returns_settled_statuses_to_idle() {
        assert_eq!(reset_status(SubmitStatus::Success), SubmitStatus::Idle);
        assert_eq!(reset_status(SubmitStatus::Error), SubmitStatus::Idle);
        assert_eq!(reset_status(SubmitStatus::Idle), SubmitStatus::Idle);
    }

    #[test]
    fn test_banner_reset_leaves_an_inflight_submission_alone() {
        // A stale timer firing after a resubmission started must not
        // drop the Sending state that keeps the button disabled.
        assert_eq!(reset_status(SubmitStatus::Sending), SubmitStatus::Sending);
    }

    #[test]
    fn test_rejected_error_mentions_the_status_code() {
        let err = SendError::Rejected(418);
        assert!(err.to_string().contains("418"));
    }
}
