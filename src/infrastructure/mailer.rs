use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::contact::ContactSubmission;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// SMTP settings for contact form delivery. Credentials are optional:
/// without them submissions are logged rather than mailed, which is a valid
/// configuration and not an error.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// Staff address that receives contact form submissions.
    pub contact_email: String,
}

/// Delivers contact form submissions to staff over SMTP.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    to: String,
}

impl Mailer {
    pub fn from_config(config: &MailerConfig) -> Result<Self, MailError> {
        let transport = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => Some(
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(Credentials::new(username.clone(), password.clone()))
                    .build(),
            ),
            _ => None,
        };

        Ok(Self {
            from: config
                .smtp_username
                .clone()
                .unwrap_or_else(|| config.contact_email.clone()),
            to: config.contact_email.clone(),
            transport,
        })
    }

    /// Send a contact form submission to staff.
    ///
    /// Falls back to logging the submission when SMTP is not configured or
    /// the send fails, so submissions are never silently lost.
    pub async fn send_contact_email(&self, submission: &ContactSubmission) {
        let Some(transport) = &self.transport else {
            info!("SMTP credentials not configured, logging contact form instead");
            log_submission(submission);
            return;
        };

        match self.deliver(transport, submission).await {
            Ok(()) => info!(name = submission.name.as_str(), "contact email sent"),
            Err(err) => {
                warn!(error = %err, "failed to send contact email");
                log_submission(submission);
            }
        }
    }

    async fn deliver(
        &self,
        transport: &AsyncSmtpTransport<Tokio1Executor>,
        submission: &ContactSubmission,
    ) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(format!(
                "New Contact Form Submission - {}",
                submission.service
            ))
            .header(ContentType::TEXT_PLAIN)
            .body(contact_email_body(submission))?;

        transport.send(message).await?;
        Ok(())
    }
}

/// Plain text body listing every submitted field.
pub fn contact_email_body(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission received:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Company: {company}\n\
         Phone: {phone}\n\
         Service Interest: {service}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         ---\n\
         Sent from the HST Professional Services website\n",
        name = submission.name,
        email = submission.email,
        company = submission.company.as_deref().unwrap_or("Not provided"),
        phone = submission.phone.as_deref().unwrap_or("Not provided"),
        service = submission.service,
        message = submission.message,
    )
}

fn log_submission(submission: &ContactSubmission) {
    info!(
        name = submission.name.as_str(),
        email = submission.email.as_str(),
        company = submission.company.as_deref().unwrap_or(""),
        phone = submission.phone.as_deref().unwrap_or(""),
        service = submission.service.as_str(),
        message = submission.message.as_str(),
        "contact form submission"
    );
}
