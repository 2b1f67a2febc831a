use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use tetrapress::content::{NewLead, RECENT_LIMIT};
use tetrapress::layout::{layout_article, LayoutContext};

use crate::web::forms::{BlogQuery, ContactForm};
use crate::web::helpers::{client_key, redirect, render, render_not_found, viewport_width};
use crate::web::markup::render_blocks;
use crate::web::state::AppState;
use crate::web::templates::{BlogDetailsTemplate, NotFoundTemplate, RecentLink};

const DEFAULT_PAGE_TITLE: &str = "Tetrahedron Blog";

fn contact_notice(status: Option<&str>) -> (bool, bool, String) {
    match status {
        Some("open") => (true, false, String::new()),
        Some("sent") => (false, true, String::new()),
        Some("invalid") => (
            false,
            false,
            "Please check your name, email and phone number.".to_string(),
        ),
        Some("busy") => (
            false,
            false,
            "Too many messages from you just now, please try again later.".to_string(),
        ),
        _ => (false, false, String::new()),
    }
}

/// Article URL, keeping an explicit viewport override.
fn article_href(slug: &str, vw: Option<u32>) -> String {
    match vw {
        Some(w) => format!("/{slug}?vw={w}"),
        None => format!("/{slug}"),
    }
}

/// Article URL with one more query parameter and the contact anchor.
fn contact_href(slug: &str, vw: Option<u32>, param: &str) -> String {
    let base = article_href(slug, vw);
    let separator = if vw.is_some() { '&' } else { '?' };
    format!("{base}{separator}{param}#contact")
}

fn parse_width(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
}

#[get("/{slug}")]
pub async fn blog_details(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<BlogQuery>,
) -> impl Responder {
    let slug = path.into_inner();
    let Some(article) = state.library.get(&slug) else {
        return render_not_found(NotFoundTemplate { slug });
    };

    let width_override = parse_width(query.vw.as_deref());
    let ctx = LayoutContext::from_observation(viewport_width(&req, width_override));

    let body = render_blocks(
        &layout_article(article, ctx),
        &contact_href(&slug, width_override, "contact=open"),
    );

    let recent = state
        .library
        .recent(RECENT_LIMIT)
        .into_iter()
        .map(|summary| RecentLink {
            href: summary.href(),
            has_image: summary.image.is_some(),
            image: summary.image.unwrap_or_default(),
            title: summary.title,
        })
        .collect();

    let (contact_open, contact_sent, contact_error) = contact_notice(query.contact.as_deref());

    render(BlogDetailsTemplate {
        page_title: article
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
        title: article.title.clone().unwrap_or_default(),
        has_title: article.title.is_some(),
        body,
        recent,
        stacked: ctx.stacked_sidebar,
        narrow: ctx.narrow,
        contact_open,
        contact_sent,
        contact_error,
        button_label: article.cta_button_label().to_string(),
        close_href: article_href(&slug, width_override),
        vw: width_override.map(|w| w.to_string()).unwrap_or_default(),
        slug,
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let ContactForm {
        slug,
        vw,
        name,
        email,
        phone,
    } = form.into_inner();
    let vw = parse_width(vw.as_deref());

    let Some(slug) = slug.filter(|s| state.library.get(s).is_some()) else {
        return HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body("Unknown article");
    };

    if !state.contact_throttle.allow(&client_key(&req)) {
        log::warn!("Contact form throttled for {}", client_key(&req));
        return redirect(&req, &contact_href(&slug, vw, "contact=busy")).finish();
    }

    let recorded = {
        let mut book = state
            .leads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        book.record(
            NewLead { name, email, phone },
            chrono::Local::now().naive_local(),
        )
        .map(|lead| lead.id)
    };

    match recorded {
        Ok(id) => {
            log::info!("Recorded lead {id} from /{slug}");
            redirect(&req, &contact_href(&slug, vw, "contact=sent")).finish()
        }
        Err(e) => {
            log::warn!("Rejected contact submission from /{slug}: {e}");
            redirect(&req, &contact_href(&slug, vw, "contact=invalid")).finish()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_submit);
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web::Data, App};

    use tetrapress::config::Config;
    use tetrapress::content::BlogLibrary;

    use crate::web::security::CONTACT_MAX_SUBMISSIONS;
    use crate::web::state::AppState;

    fn state() -> AppState {
        let library = BlogLibrary::from_json(
            r#"[{
                "slug": "hello",
                "title": "Hello",
                "sections": [{ "heading": "A" }, { "heading": "B" }],
                "cta": { "text": "Join" }
            }]"#,
        )
        .unwrap();
        AppState::new(&Config::default(), library)
    }

    #[actix_web::test]
    async fn test_known_slug_renders_article() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .configure(super::configure)
                .service(super::blog_details),
        )
        .await;

        let req = test::TestRequest::get().uri("/hello?vw=400").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert_eq!(html.matches(r#"class="cta-block""#).count(), 2);
        assert!(html.contains("layout-narrow"));
    }

    #[actix_web::test]
    async fn test_unknown_slug_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .service(super::blog_details),
        )
        .await;

        let req = test::TestRequest::get().uri("/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_contact_submission_becomes_a_lead() {
        let state = state();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .configure(super::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form([
                ("slug", "hello"),
                ("name", "Meera"),
                ("email", "meera@example.com"),
                ("phone", "9000012345"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let book = state.leads.lock().unwrap();
        let last = book.leads().last().unwrap();
        assert_eq!(last.name, "Meera");
        assert_eq!(last.email, "meera@example.com");
    }

    fn contact_post(vw: Option<&str>) -> test::TestRequest {
        let mut fields = vec![
            ("slug", "hello"),
            ("name", "Meera"),
            ("email", "meera@example.com"),
        ];
        if let Some(vw) = vw {
            fields.push(("vw", vw));
        }
        test::TestRequest::post()
            .uri("/contact")
            .set_form(fields)
    }

    #[actix_web::test]
    async fn test_sixth_contact_post_is_throttled() {
        let state = state();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .configure(super::configure),
        )
        .await;

        for _ in 0..CONTACT_MAX_SUBMISSIONS {
            let resp = test::call_service(&app, contact_post(None).to_request()).await;
            assert_eq!(
                resp.headers().get(header::LOCATION).unwrap(),
                "/hello?contact=sent#contact"
            );
        }

        let resp = test::call_service(&app, contact_post(None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/hello?contact=busy#contact"
        );
        let recorded = state.leads.lock().unwrap().len();
        assert_eq!(recorded, 2 + CONTACT_MAX_SUBMISSIONS);
    }

    #[actix_web::test]
    async fn test_contact_redirect_keeps_viewport_override() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .configure(super::configure),
        )
        .await;

        let resp = test::call_service(&app, contact_post(Some("400")).to_request()).await;
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/hello?vw=400&contact=sent#contact"
        );
    }

    #[actix_web::test]
    async fn test_contact_form_carries_viewport_override() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .service(super::blog_details),
        )
        .await;

        let req = test::TestRequest::get().uri("/hello?vw=400").to_request();
        let body = test::read_body(test::call_service(&app, req).await).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"<input type="hidden" name="vw" value="400">"#));

        let req = test::TestRequest::get().uri("/hello").to_request();
        let body = test::read_body(test::call_service(&app, req).await).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(!html.contains(r#"name="vw""#));
    }
}
