use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use tetrapress::content::validate_email;
use tetrapress::session::{SessionContext, LOGIN_ROUTE};

use crate::web::forms::{LoginForm, LoginQuery};
use crate::web::helpers::{redirect, render};
use crate::web::session::CookieSession;
use crate::web::templates::LoginTemplate;

const MIN_PASSWORD_LEN: usize = 4;

#[get("/admin-login")]
pub async fn login_form(req: HttpRequest, query: web::Query<LoginQuery>) -> impl Responder {
    let error = match query.error.as_deref() {
        Some("credentials") => "Invalid email or password".to_string(),
        Some(_) => "Something went wrong, please try again".to_string(),
        None => String::new(),
    };
    let account = SessionContext::new(CookieSession::new(&req))
        .account()
        .unwrap_or_default();

    render(LoginTemplate { error, account })
}

/// Demo sign-in: any well-formed email with a short password is accepted and
/// stored as the admin session.
#[post("/admin-login")]
pub async fn login_submit(req: HttpRequest, form: web::Form<LoginForm>) -> impl Responder {
    let email = form.email.trim();
    if !validate_email(email) || form.password.len() < MIN_PASSWORD_LEN {
        log::warn!("Rejected admin sign-in for {email:?}");
        return redirect(&req, &format!("{LOGIN_ROUTE}?error=credentials")).finish();
    }

    let mut session = SessionContext::new(CookieSession::new(&req));
    session.sign_in(&Uuid::new_v4().to_string(), email);

    let mut builder = redirect(&req, "/admin-dashboard");
    for cookie in session.into_inner().into_cookies() {
        builder.cookie(cookie);
    }

    log::info!("Admin {email} signed in");
    builder.finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form).service(login_submit);
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use tetrapress::session::{ADMIN_ACCOUNT_KEY, ADMIN_TOKEN_KEY};

    #[actix_web::test]
    async fn test_sign_in_sets_session_cookies() {
        let app = test::init_service(App::new().configure(super::configure)).await;

        let req = test::TestRequest::post()
            .uri("/admin-login")
            .set_form([("email", "admin@example.com"), ("password", "secret")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/admin-dashboard"
        );
        let account = resp
            .response()
            .cookies()
            .find(|c| c.name() == ADMIN_ACCOUNT_KEY)
            .map(|c| c.value().to_string());
        assert_eq!(account.as_deref(), Some("admin@example.com"));
        assert!(resp
            .response()
            .cookies()
            .any(|c| c.name() == ADMIN_TOKEN_KEY && !c.value().is_empty()));
    }

    #[actix_web::test]
    async fn test_bad_credentials_return_to_login() {
        let app = test::init_service(App::new().configure(super::configure)).await;

        let req = test::TestRequest::post()
            .uri("/admin-login")
            .set_form([("email", "not-an-email"), ("password", "secret")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/admin-login?error=credentials"
        );
        assert_eq!(resp.response().cookies().count(), 0);
    }
}
