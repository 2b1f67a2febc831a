use askama::Template;

use tetrapress::dashboard::BlogDraft;
use tetrapress::models::{BlogEntry, DashboardStats, Lead, UserRow};

pub struct NavItem {
    pub label: &'static str,
    pub action: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub heading: &'static str,
    pub panel: &'static str,
    pub nav: Vec<NavItem>,
    pub account: String,
    pub stats: DashboardStats,
    pub chart_svg: String,
    pub users: Vec<UserRow>,
    pub leads: Vec<Lead>,
    pub blogs: Vec<BlogEntry>,
    pub draft: BlogDraft,
    pub modal: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: String,
    pub account: String,
}

pub struct RecentLink {
    pub href: String,
    pub title: String,
    pub image: String,
    pub has_image: bool,
}

#[derive(Template)]
#[template(path = "public/blog.html")]
pub struct BlogDetailsTemplate {
    pub page_title: String,
    pub title: String,
    pub has_title: bool,
    pub slug: String,
    pub body: String,
    pub recent: Vec<RecentLink>,
    pub stacked: bool,
    pub narrow: bool,
    pub contact_open: bool,
    pub contact_sent: bool,
    pub contact_error: String,
    pub button_label: String,
    pub close_href: String,
    /// Viewport override to carry through the contact form, empty when unset.
    pub vw: String,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
}
