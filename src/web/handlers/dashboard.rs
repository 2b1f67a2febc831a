use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use tetrapress::content::demo;
use tetrapress::dashboard::{DashboardShell, Panel, DELETE_BLOG_DIALOG, LOGOUT_DIALOG};
use tetrapress::models::{BlogId, Lead};
use tetrapress::session::{SessionContext, LOGIN_ROUTE};

use crate::web::forms::DraftForm;
use crate::web::helpers::{redirect, render, view_cookie, view_id, view_removal_cookie};
use crate::web::markup::{confirm_modal, growth_chart_svg};
use crate::web::session::{CookieSession, RedirectNavigator};
use crate::web::state::AppState;
use crate::web::templates::{DashboardTemplate, NavItem};

const DASHBOARD_ROUTE: &str = "/admin-dashboard";

fn dashboard_page(shell: &DashboardShell, account: String, leads: Vec<Lead>) -> DashboardTemplate {
    let active = shell.active_panel();

    let nav = Panel::ALL
        .into_iter()
        .map(|panel| NavItem {
            label: panel.label(),
            action: format!("{DASHBOARD_ROUTE}/panel/{}", panel.slug()),
            active: panel == active,
        })
        .collect();

    let mut modal = String::new();
    if let Some(manager) = shell.blog_manager() {
        if manager.pending_delete().is_some() {
            modal.push_str(&confirm_modal(
                &DELETE_BLOG_DIALOG,
                "/admin-dashboard/blogs/delete/confirm",
                "/admin-dashboard/blogs/delete/cancel",
            ));
        }
    }
    if shell.logout_confirm_visible() {
        modal.push_str(&confirm_modal(
            &LOGOUT_DIALOG,
            "/admin-dashboard/logout/confirm",
            "/admin-dashboard/logout/cancel",
        ));
    }

    DashboardTemplate {
        heading: active.label(),
        panel: active.slug(),
        nav,
        account,
        stats: demo::stats(),
        chart_svg: growth_chart_svg(&demo::user_growth()),
        users: demo::users(),
        leads,
        blogs: shell
            .blog_manager()
            .map(|m| m.blogs().to_vec())
            .unwrap_or_default(),
        draft: shell.draft().cloned().unwrap_or_default(),
        modal,
    }
}

/// Applies one transition to the caller's view and sends the browser back to
/// the dashboard.
fn transition(
    state: &AppState,
    req: &HttpRequest,
    f: impl FnOnce(&mut DashboardShell),
) -> HttpResponse {
    let (id, mounted, ()) = state.views.with_view(view_id(req), f);

    let mut builder = redirect(req, DASHBOARD_ROUTE);
    if mounted {
        builder.cookie(view_cookie(id));
    }
    builder.finish()
}

#[get("/admin-dashboard")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let (id, mounted, shell) = state.views.with_view(view_id(&req), |shell| shell.clone());

    let account = SessionContext::new(CookieSession::new(&req))
        .account()
        .unwrap_or_default();
    let leads = state
        .leads
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .leads()
        .to_vec();

    let mut resp = render(dashboard_page(&shell, account, leads));
    if mounted {
        if let Err(e) = resp.add_cookie(&view_cookie(id)) {
            log::warn!("Failed to attach view cookie: {e}");
        }
    }
    resp
}

#[post("/admin-dashboard/panel/{panel}")]
pub async fn select_panel(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let panel = match path.into_inner().parse::<Panel>() {
        Ok(panel) => panel,
        Err(e) => {
            return HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string())
        }
    };

    transition(&state, &req, |shell| shell.select_panel(panel))
}

#[post("/admin-dashboard/logout/request")]
pub async fn logout_request(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    transition(&state, &req, DashboardShell::request_logout)
}

#[post("/admin-dashboard/logout/cancel")]
pub async fn logout_cancel(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    transition(&state, &req, DashboardShell::cancel_logout)
}

#[post("/admin-dashboard/logout/confirm")]
pub async fn logout_confirm(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    // Logging out unmounts the view; a request without one still clears the
    // session.
    let mut shell = view_id(&req)
        .and_then(|id| state.views.unmount(id))
        .unwrap_or_default();

    let mut session = SessionContext::new(CookieSession::new(&req));
    let mut navigator = RedirectNavigator::default();
    shell.confirm_logout(&mut session, &mut navigator);

    let location = navigator.location().unwrap_or(LOGIN_ROUTE).to_string();
    let mut builder = redirect(&req, &location);
    for cookie in session.into_inner().into_cookies() {
        builder.cookie(cookie);
    }
    builder.cookie(view_removal_cookie());

    log::info!("Admin session cleared, redirecting to {location}");
    builder.finish()
}

#[post("/admin-dashboard/blogs/{id}/delete")]
pub async fn delete_request(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<BlogId>,
) -> impl Responder {
    let id = path.into_inner();
    transition(&state, &req, |shell| match shell.blog_manager_mut() {
        Some(manager) => manager.request_delete(id),
        None => log::debug!("Ignoring delete request for blog {id}: panel not mounted"),
    })
}

#[post("/admin-dashboard/blogs/delete/confirm")]
pub async fn delete_confirm(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    transition(&state, &req, |shell| {
        if let Some(removed) = shell.blog_manager_mut().and_then(|m| m.confirm_delete()) {
            log::info!("Deleted blog {} ({})", removed.id, removed.title);
        }
    })
}

#[post("/admin-dashboard/blogs/delete/cancel")]
pub async fn delete_cancel(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    transition(&state, &req, |shell| {
        if let Some(manager) = shell.blog_manager_mut() {
            manager.cancel_delete();
        }
    })
}

#[post("/admin-dashboard/draft")]
pub async fn update_draft(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<DraftForm>,
) -> impl Responder {
    let DraftForm { title, content } = form.into_inner();
    transition(&state, &req, move |shell| {
        if let Some(draft) = shell.draft_mut() {
            draft.update(title, content);
        }
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(select_panel)
        .service(logout_request)
        .service(logout_cancel)
        .service(logout_confirm)
        .service(delete_request)
        .service(delete_confirm)
        .service(delete_cancel)
        .service(update_draft);
}
