mod assets;
mod contact;
mod pages;

use askama::Template;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::Html;
use axum::routing::get;
use chrono::{Datelike, Utc};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, error};

use crate::application::state::AppState;
use crate::presentation::web::templates::render_template;
use crate::presentation::web::views::SiteView;

/// 64 KB request body limit: the only inbound payload is the contact form.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/services", get(pages::services_page))
        .route("/blog", get(pages::blog_page))
        .route(
            "/contact",
            get(contact::contact_page).post(contact::submit_contact_form),
        )
        .route("/contact/success", get(contact::contact_success_page))
        .route("/health", get(pages::health_check))
        .route("/static/css/styles.css", get(assets::styles))
        .route("/static/favicon.svg", get(assets::favicon))
        .route("/static/images/{name}", get(assets::placeholder_image))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(HstwebMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(CompressionLayer::new().gzip(true)),
        )
        .with_state(state)
}

#[derive(Clone)]
struct HstwebMakeSpan;

impl<B> MakeSpan<B> for HstwebMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

pub(crate) fn render_html<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    render_template(template).map(Html).map_err(|err| {
        error!(error = %err, "failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub(crate) fn site_view(state: &AppState) -> SiteView {
    SiteView {
        site_name: state.site.site_name.clone(),
        site_description: state.site.site_description.clone(),
        contact_email: state.site.contact_email.clone(),
        contact_phone: state.site.contact_phone.clone(),
        company_address: state.site.company_address.clone(),
        current_year: Utc::now().year(),
    }
}
