use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::alerts::Alert;
use crate::delivery::DispatchError;
use crate::delivery::mail::MailClient;
use crate::delivery::sheets::SheetMirror;
use crate::models::contact::ContactSubmission;

/// Where the page goes after a delivered submission.
pub const CONFIRMATION_DESTINATION: &str = "thank-you.html";

pub const SUCCESS_ALERT: &str = "Your message has been sent successfully!";
pub const FAILURE_ALERT: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

const EMAIL_ALERT: &str = "Please enter a valid email address.";
const PHONE_ALERT: &str =
    "Please enter a valid phone number (e.g., +63 912 345 6789, 0912 345 6789, or 912 345 6789).";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Leading digit or +, then 6 to 20 digits/spaces/dashes/parens, so local
// and international spellings both pass
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9][\d\s\-()]{6,20}$").expect("phone pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value.trim())
}

/// Pretty-prints a ten-digit number as (xxx) xxx-xxxx. Anything that does
/// not reduce to exactly ten digits is returned unchanged.
pub fn format_phone_display(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        raw.to_string()
    }
}

/// Everything wrong with one submission. Field labels appear in form
/// order; format flags are only raised for non-empty values.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ValidationReport {
    pub missing: Vec<String>,
    pub invalid_email: bool,
    pub invalid_phone: bool,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && !self.invalid_email && !self.invalid_phone
    }

    /// Banners in the order the page raises them: format complaints first,
    /// then one consolidated banner naming every empty field.
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if self.invalid_email {
            alerts.push(Alert::error(EMAIL_ALERT));
        }
        if self.invalid_phone {
            alerts.push(Alert::error(PHONE_ALERT));
        }
        if !self.missing.is_empty() {
            let noun = if self.missing.len() == 1 { "field" } else { "fields" };
            alerts.push(
                Alert::error(
                    &format!("Please fill in the following {}: {}", noun, self.missing.join(", "))
                )
            );
        }

        alerts
    }
}

/// Checks one submission. `country` and `service` are validated only when
/// the form variant carries them.
pub fn validate(submission: &ContactSubmission) -> ValidationReport {
    let mut report = ValidationReport::default();

    require(&mut report, "First Name", &submission.first_name);
    require(&mut report, "Last Name", &submission.last_name);
    require(&mut report, "Email Address", &submission.email);
    require(&mut report, "Phone Number", &submission.phone);
    require(&mut report, "Message", &submission.message);

    if let Some(country) = &submission.country {
        require(&mut report, "Country", country);
    }
    if let Some(service) = &submission.service {
        require(&mut report, "Service Interest", service);
    }

    let email = submission.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        report.invalid_email = true;
    }

    let phone = submission.phone.trim();
    if !phone.is_empty() && !is_valid_phone(phone) {
        report.invalid_phone = true;
    }

    report
}

fn require(report: &mut ValidationReport, label: &str, value: &str) {
    if value.trim().is_empty() {
        report.missing.push(label.to_string());
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submission failed validation")]
    Validation(ValidationReport),
    #[error("Submission could not be delivered: {0}")]
    Dispatch(#[from] DispatchError),
}

#[derive(Serialize, Debug, Clone)]
pub struct SubmitOutcome {
    pub redirect: &'static str,
}

/// Validates and delivers contact submissions. The mail API is the primary
/// target; the spreadsheet mirror runs after it and never affects the
/// outcome.
#[derive(Clone)]
pub struct ContactRelay {
    mailer: MailClient,
    mirror: Option<SheetMirror>,
}

impl ContactRelay {
    pub fn new(mailer: MailClient, mirror: Option<SheetMirror>) -> Self {
        Self { mailer, mirror }
    }

    pub async fn submit(
        &self,
        submission: &ContactSubmission
    ) -> Result<SubmitOutcome, SubmitError> {
        let report = validate(submission);
        if !report.is_ok() {
            return Err(SubmitError::Validation(report));
        }

        let record = submission.to_record();
        self.mailer.send(&record).await?;

        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.append(&record).await {
                warn!("Spreadsheet mirror failed (submission already delivered): {}", e);
            }
        }

        Ok(SubmitOutcome {
            redirect: CONFIRMATION_DESTINATION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{ method, path };
    use wiremock::{ Mock, MockServer, ResponseTemplate };

    fn filled_submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+63 912 345 6789".to_string(),
            country: None,
            service: None,
            message: "I need a site.".to_string(),
            timestamp: None,
        }
    }

    fn empty_submission() -> ContactSubmission {
        ContactSubmission {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: None,
            service: None,
            message: String::new(),
            timestamp: None,
        }
    }

    #[test]
    fn email_format_accepts_and_rejects_the_usual_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.museum"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn phone_format_accepts_local_and_international_spellings() {
        assert!(is_valid_phone("+63 912 345 6789"));
        assert!(is_valid_phone("0912 345 6789"));
        assert!(is_valid_phone("912 345 6789"));
        assert!(is_valid_phone("1 (800) 555-0199"));
        assert!(!is_valid_phone("(02) 8888-1234"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
    }

    #[test]
    fn ten_digit_numbers_get_the_display_format() {
        assert_eq!(format_phone_display("9123456789"), "(912) 345-6789");
        assert_eq!(format_phone_display("091-234-5678"), "(091) 234-5678");
        assert_eq!(format_phone_display("+63 912 345 6789"), "+63 912 345 6789");
    }

    #[test]
    fn empty_short_form_reports_all_five_labels_in_order() {
        let report = validate(&empty_submission());
        assert_eq!(
            report.missing,
            vec!["First Name", "Last Name", "Email Address", "Phone Number", "Message"]
        );
        assert!(!report.invalid_email);
        assert!(!report.invalid_phone);

        let alerts = report.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].message,
            "Please fill in the following fields: First Name, Last Name, Email Address, \
             Phone Number, Message"
        );
    }

    #[test]
    fn empty_long_form_reports_seven_labels() {
        let mut submission = empty_submission();
        submission.country = Some(String::new());
        submission.service = Some(String::new());

        let report = validate(&submission);
        assert_eq!(report.missing.len(), 7);
        assert_eq!(report.missing[5], "Country");
        assert_eq!(report.missing[6], "Service Interest");
    }

    #[test]
    fn single_missing_field_uses_the_singular_banner() {
        let mut submission = filled_submission();
        submission.message = "  ".to_string();

        let alerts = validate(&submission).alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Please fill in the following field: Message");
    }

    #[test]
    fn format_complaints_come_before_the_missing_banner() {
        let mut submission = empty_submission();
        submission.email = "not-an-email".to_string();

        let report = validate(&submission);
        assert!(report.invalid_email);

        let alerts = report.alerts();
        assert_eq!(alerts[0].message, "Please enter a valid email address.");
        assert!(alerts[1].message.starts_with("Please fill in the following fields:"));
    }

    #[tokio::test]
    async fn delivered_submission_redirects_even_when_the_mirror_fails() {
        let mail_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mail_server).await;

        let mirror_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mirror_server).await;

        let relay = ContactRelay::new(
            MailClient::new(&mail_server.uri(), "svc", "tpl", "key").unwrap(),
            Some(SheetMirror::new(&mirror_server.uri()).unwrap())
        );

        let outcome = relay.submit(&filled_submission()).await.unwrap();
        assert_eq!(outcome.redirect, "thank-you.html");
    }

    #[tokio::test]
    async fn mail_failure_abandons_the_submission() {
        let mail_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mail_server).await;

        let relay = ContactRelay::new(
            MailClient::new(&mail_server.uri(), "svc", "tpl", "key").unwrap(),
            None
        );

        let result = relay.submit(&filled_submission()).await;
        assert!(matches!(result, Err(SubmitError::Dispatch(_))));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_wire() {
        let mail_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mail_server).await;

        let relay = ContactRelay::new(
            MailClient::new(&mail_server.uri(), "svc", "tpl", "key").unwrap(),
            None
        );

        let result = relay.submit(&empty_submission()).await;
        match result {
            Err(SubmitError::Validation(report)) => assert_eq!(report.missing.len(), 5),
            other => panic!("expected a validation error, got {:?}", other.map(|o| o.redirect)),
        }
    }
}
