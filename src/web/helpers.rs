use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};
use askama::Template;
use uuid::Uuid;

use crate::web::views::VIEW_COOKIE;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// `303 See Other` for plain form posts, `HX-Redirect` for htmx requests.
/// Cookies can still be attached to the returned builder.
pub fn redirect(req: &HttpRequest, location: &str) -> HttpResponseBuilder {
    let mut builder = if is_htmx(req) {
        let mut b = HttpResponse::Ok();
        b.insert_header(("HX-Redirect", location.to_string()));
        b
    } else {
        let mut b = HttpResponse::SeeOther();
        b.insert_header(("Location", location.to_string()));
        b
    };
    builder.insert_header(("Cache-Control", "no-store"));
    builder
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

pub fn render_not_found<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Not found")
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn view_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(VIEW_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

/// Session-lifetime cookie binding a browser to its dashboard view.
pub fn view_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(VIEW_COOKIE, id.to_string())
        .path("/admin-dashboard")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn view_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(VIEW_COOKIE, "")
        .path("/admin-dashboard")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

/// Viewport width in CSS pixels: the `vw` query override first, then the
/// `Sec-CH-Viewport-Width` client hint, then the legacy `Viewport-Width` hint.
pub fn viewport_width(req: &HttpRequest, query_override: Option<u32>) -> Option<u32> {
    query_override.or_else(|| {
        ["Sec-CH-Viewport-Width", "Viewport-Width"]
            .into_iter()
            .find_map(|name| {
                req.headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .filter(|w| w.is_finite() && *w > 0.0)
                    .map(|w| w.round() as u32)
            })
    })
}

pub fn client_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
