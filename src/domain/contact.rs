use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const COMPANY_MAX: usize = 100;
const PHONE_MIN_DIGITS: usize = 7;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 2000;

/// A raw contact form payload as submitted by the browser. Optional fields
/// arrive as empty strings when left blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

/// A validated contact form submission, ready to be mailed to staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("name must be between {NAME_MIN} and {NAME_MAX} characters")]
    InvalidName,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("company name must be at most {COMPANY_MAX} characters")]
    CompanyTooLong,
    #[error("phone number is too short")]
    PhoneTooShort,
    #[error("please select a service")]
    MissingService,
    #[error("message must be between {MESSAGE_MIN} and {MESSAGE_MAX} characters")]
    InvalidMessage,
}

impl NewContactSubmission {
    /// Validate and normalize into a `ContactSubmission`.
    ///
    /// Text fields are trimmed; blank optional fields become `None`.
    pub fn validate(self) -> Result<ContactSubmission, ContactValidationError> {
        let name = self.name.trim().to_string();
        if name.chars().count() < NAME_MIN || name.chars().count() > NAME_MAX {
            return Err(ContactValidationError::InvalidName);
        }

        let email = self.email.trim().to_string();
        if !is_plausible_email(&email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        let company = normalize_optional(self.company);
        if let Some(company) = &company
            && company.chars().count() > COMPANY_MAX
        {
            return Err(ContactValidationError::CompanyTooLong);
        }

        let phone = normalize_optional(self.phone);
        if let Some(phone) = &phone
            && phone.chars().filter(char::is_ascii_digit).count() < PHONE_MIN_DIGITS
        {
            return Err(ContactValidationError::PhoneTooShort);
        }

        let service = self.service.trim().to_string();
        if service.is_empty() {
            return Err(ContactValidationError::MissingService);
        }

        let message = self.message.trim().to_string();
        if message.chars().count() < MESSAGE_MIN || message.chars().count() > MESSAGE_MAX {
            return Err(ContactValidationError::InvalidMessage);
        }

        Ok(ContactSubmission {
            name,
            email,
            company,
            phone,
            service,
            message,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Syntactic plausibility check only: one `@`, non-empty local part, and a
/// dotted domain without whitespace.
fn is_plausible_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
