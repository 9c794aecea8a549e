use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::application::routes::{render_html, site_view};
use crate::application::state::AppState;
use crate::presentation::web::templates::{
    AboutTemplate, BlogTemplate, HomeTemplate, ServicesTemplate,
};
use crate::presentation::web::views::{
    ArticleView, CompanyStatView, DetailedServiceView, ServiceCardView, TeamMemberView,
};

pub(crate) async fn home_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (hero_image, services_images) = tokio::join!(
        state.assets.resolve("business-team", 1920, 1080),
        state.assets.resolve_all(
            &[
                "technology-consulting",
                "business-strategy",
                "digital-transformation",
            ],
            400,
            300,
        ),
    );

    let mut images = services_images.into_iter();
    let services = vec![
        ServiceCardView {
            title: "Technology Consulting",
            description: "Strategic technology guidance and implementation",
            icon: "🚀",
            image: images.next(),
        },
        ServiceCardView {
            title: "Digital Transformation",
            description: "Modernize your business with cutting-edge solutions",
            icon: "💡",
            image: images.next(),
        },
        ServiceCardView {
            title: "Business Strategy",
            description: "Data-driven strategies for sustainable growth",
            icon: "📈",
            image: images.next(),
        },
    ];

    let template = HomeTemplate {
        nav_active: "home",
        site: site_view(&state),
        page_title: "Professional Technology Consulting Services",
        page_description: "Leading provider of technology consulting, digital transformation, \
                           and business strategy services",
        hero_image,
        services,
    };

    render_html(template).map(IntoResponse::into_response)
}

pub(crate) async fn about_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (team_hero, office_images, cto_image, strategist_image, consultant_image) = tokio::join!(
        state.assets.resolve("professional-team", 1200, 600),
        state
            .assets
            .resolve_all(&["modern-office", "team-meeting", "workspace"], 400, 300),
        state.assets.resolve("professional-woman", 300, 300),
        state.assets.resolve("professional-man", 300, 300),
        state.assets.resolve("business-woman", 300, 300),
    );

    let team_members = vec![
        TeamMemberView {
            name: "Sarah Johnson",
            title: "Chief Technology Officer",
            bio: "15+ years in enterprise technology solutions",
            image: cto_image,
        },
        TeamMemberView {
            name: "Michael Chen",
            title: "Senior Business Strategist",
            bio: "Expert in digital transformation and process optimization",
            image: strategist_image,
        },
        TeamMemberView {
            name: "Emily Rodriguez",
            title: "Lead Consultant",
            bio: "Specializes in cloud architecture and system integration",
            image: consultant_image,
        },
    ];

    let company_stats = vec![
        CompanyStatView {
            number: "500+",
            label: "Projects Completed",
        },
        CompanyStatView {
            number: "50+",
            label: "Enterprise Clients",
        },
        CompanyStatView {
            number: "15+",
            label: "Years Experience",
        },
        CompanyStatView {
            number: "99%",
            label: "Client Satisfaction",
        },
    ];

    let template = AboutTemplate {
        nav_active: "about",
        site: site_view(&state),
        page_title: "About HST - Professional Technology Consultants",
        page_description: "Learn about our experienced team of technology consultants and \
                           business strategists",
        team_hero,
        office_images,
        team_members,
        company_stats,
    };

    render_html(template).map(IntoResponse::into_response)
}

pub(crate) async fn services_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (services_hero, service_images) = tokio::join!(
        state.assets.resolve("business-consulting", 1200, 600),
        state.assets.resolve_all(
            &[
                "technology-stack",
                "cloud-computing",
                "data-analytics",
                "cybersecurity",
                "mobile-development",
                "ai-machine-learning",
            ],
            500,
            400,
        ),
    );

    let mut images = service_images.into_iter();
    let detailed_services = vec![
        DetailedServiceView {
            title: "Cloud Migration & Architecture",
            description: "Seamless transition to cloud platforms with optimized architecture design",
            features: vec![
                "AWS/Azure/GCP Migration",
                "Architecture Design",
                "Cost Optimization",
                "Security Implementation",
            ],
            image: images.next(),
        },
        DetailedServiceView {
            title: "Digital Transformation",
            description: "End-to-end digital transformation strategies and implementation",
            features: vec![
                "Process Automation",
                "Legacy System Modernization",
                "Digital Strategy",
                "Change Management",
            ],
            image: images.next(),
        },
        DetailedServiceView {
            title: "Data Analytics & AI",
            description: "Advanced analytics solutions and artificial intelligence implementation",
            features: vec![
                "Business Intelligence",
                "Machine Learning",
                "Predictive Analytics",
                "Data Visualization",
            ],
            image: images.next(),
        },
        DetailedServiceView {
            title: "Cybersecurity Consulting",
            description: "Comprehensive security assessments and implementation strategies",
            features: vec![
                "Security Audits",
                "Compliance Management",
                "Incident Response",
                "Security Training",
            ],
            image: images.next(),
        },
        DetailedServiceView {
            title: "Custom Software Development",
            description: "Tailored software solutions for unique business requirements",
            features: vec![
                "Web Applications",
                "Mobile Apps",
                "API Development",
                "System Integration",
            ],
            image: images.next(),
        },
        DetailedServiceView {
            title: "Technology Strategy",
            description: "Strategic technology planning and roadmap development",
            features: vec![
                "Technology Roadmaps",
                "Vendor Selection",
                "Budget Planning",
                "Risk Assessment",
            ],
            image: images.next(),
        },
    ];

    let template = ServicesTemplate {
        nav_active: "services",
        site: site_view(&state),
        page_title: "Professional Technology Services - HST",
        page_description: "Comprehensive technology consulting services including cloud \
                           migration, digital transformation, and strategic planning",
        services_hero,
        detailed_services,
    };

    render_html(template).map(IntoResponse::into_response)
}

pub(crate) async fn blog_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (blog_hero, article_images) = tokio::join!(
        state.assets.resolve("business-insights", 1200, 600),
        state.assets.resolve_all(
            &["technology-trends", "business-growth", "digital-innovation"],
            400,
            250,
        ),
    );

    let mut images = article_images.into_iter();
    let featured_articles = vec![
        ArticleView {
            title: "The Future of Cloud Computing in Enterprise",
            excerpt: "Exploring emerging trends in cloud technology and their impact on \
                      business operations.",
            date: "2024-01-15",
            author: "Sarah Johnson",
            image: images.next(),
            slug: "future-cloud-computing-enterprise",
        },
        ArticleView {
            title: "Digital Transformation Success Stories",
            excerpt: "Real-world examples of successful digital transformation initiatives and \
                      lessons learned.",
            date: "2024-01-10",
            author: "Michael Chen",
            image: images.next(),
            slug: "digital-transformation-success-stories",
        },
        ArticleView {
            title: "AI and Machine Learning in Business Strategy",
            excerpt: "How artificial intelligence is reshaping business decision-making and \
                      strategy development.",
            date: "2024-01-05",
            author: "Emily Rodriguez",
            image: images.next(),
            slug: "ai-machine-learning-business-strategy",
        },
    ];

    let template = BlogTemplate {
        nav_active: "blog",
        site: site_view(&state),
        page_title: "Technology Insights & Blog - HST",
        page_description: "Latest insights on technology trends, business strategy, and \
                           digital transformation",
        blog_hero,
        featured_articles,
    };

    render_html(template).map(IntoResponse::into_response)
}

pub(crate) async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
