pub mod assets;
pub mod mailer;
