pub mod auth;
pub mod blog;
pub mod dashboard;

use actix_web::web;

/// Configure all routes EXCEPT the catch-all blog route.
/// The catch-all must be registered last to avoid matching before specific routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    dashboard::configure(cfg);
    auth::configure(cfg);
    blog::configure(cfg);
}

/// Configure the catch-all blog route. This MUST be called last.
pub fn configure_catch_all(cfg: &mut web::ServiceConfig) {
    cfg.service(blog::blog_details);
}
