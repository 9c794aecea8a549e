use crate::domain::contact::NewContactSubmission;

/// Site identity and contact details rendered into every page's chrome.
pub struct SiteView {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub company_address: String,
    pub current_year: i32,
}

/// A service summary card on the homepage.
pub struct ServiceCardView {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: Option<String>,
}

/// A full service description on the services page.
pub struct DetailedServiceView {
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub image: Option<String>,
}

pub struct TeamMemberView {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: String,
}

pub struct CompanyStatView {
    pub number: &'static str,
    pub label: &'static str,
}

/// A featured article teaser on the blog page.
pub struct ArticleView {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub image: Option<String>,
    pub slug: &'static str,
}

/// Echoed contact form values, so a failed submission re-renders with the
/// visitor's input preserved.
#[derive(Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFormView {
    pub fn from_payload(payload: &NewContactSubmission) -> Self {
        Self {
            name: payload.name.clone(),
            email: payload.email.clone(),
            company: payload.company.clone().unwrap_or_default(),
            phone: payload.phone.clone().unwrap_or_default(),
            service: payload.service.clone(),
            message: payload.message.clone(),
        }
    }
}
