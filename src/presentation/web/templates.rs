use askama::Template;

use super::views::{
    ArticleView, CompanyStatView, ContactFormView, DetailedServiceView, ServiceCardView, SiteView,
    TeamMemberView,
};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,

    pub hero_image: String,
    pub services: Vec<ServiceCardView>,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,

    pub team_hero: String,
    pub office_images: Vec<String>,
    pub team_members: Vec<TeamMemberView>,
    pub company_stats: Vec<CompanyStatView>,
}

#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,

    pub services_hero: String,
    pub detailed_services: Vec<DetailedServiceView>,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,

    pub contact_hero: String,
    pub office_image: String,
    pub contact_hours: &'static str,
    pub error: Option<String>,
    pub form: ContactFormView,
}

#[derive(Template)]
#[template(path = "pages/contact_success.html")]
pub struct ContactSuccessTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,
}

#[derive(Template)]
#[template(path = "pages/blog.html")]
pub struct BlogTemplate {
    pub nav_active: &'static str,
    pub site: SiteView,
    pub page_title: &'static str,
    pub page_description: &'static str,

    pub blog_hero: String,
    pub featured_articles: Vec<ArticleView>,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
