use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::info;

use crate::application::routes::{render_html, site_view};
use crate::application::state::AppState;
use crate::domain::contact::NewContactSubmission;
use crate::presentation::web::templates::{ContactSuccessTemplate, ContactTemplate};
use crate::presentation::web::views::ContactFormView;

const CONTACT_HOURS: &str = "Monday - Friday: 9:00 AM - 6:00 PM";

pub(crate) async fn contact_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    render_contact_page(&state, None, ContactFormView::default())
        .await
        .map(IntoResponse::into_response)
}

pub(crate) async fn submit_contact_form(
    State(state): State<AppState>,
    Form(payload): Form<NewContactSubmission>,
) -> Result<Response, StatusCode> {
    match payload.clone().validate() {
        Ok(submission) => {
            info!(
                name = submission.name.as_str(),
                email = submission.email.as_str(),
                "contact form submitted"
            );

            // Deliver in the background so the visitor is not held up by SMTP.
            let mailer = Arc::clone(&state.mailer);
            tokio::spawn(async move { mailer.send_contact_email(&submission).await });

            Ok(Redirect::to("/contact/success").into_response())
        }
        Err(err) => {
            let form = ContactFormView::from_payload(&payload);
            render_contact_page(&state, Some(err.to_string()), form)
                .await
                .map(IntoResponse::into_response)
        }
    }
}

pub(crate) async fn contact_success_page(
    State(state): State<AppState>,
) -> Result<Response, StatusCode> {
    let template = ContactSuccessTemplate {
        nav_active: "contact",
        site: site_view(&state),
        page_title: "Thank You - HST Professional Services",
        page_description: "Thank you for contacting HST Professional Services",
    };

    render_html(template).map(IntoResponse::into_response)
}

async fn render_contact_page(
    state: &AppState,
    error: Option<String>,
    form: ContactFormView,
) -> Result<Html<String>, StatusCode> {
    let (contact_hero, office_image) = tokio::join!(
        state.assets.resolve("business-meeting", 1200, 600),
        state.assets.resolve("modern-office-space", 600, 400),
    );

    let template = ContactTemplate {
        nav_active: "contact",
        site: site_view(state),
        page_title: "Contact HST - Get Professional Consulting",
        page_description: "Contact our team of professional technology consultants for your \
                           next project",
        contact_hero,
        office_image,
        contact_hours: CONTACT_HOURS,
        error,
        form,
    };

    render_html(template)
}
