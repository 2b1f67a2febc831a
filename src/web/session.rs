use std::collections::HashMap;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;

use tetrapress::session::{Navigator, SessionStore};

/// Session values carried in cookies. Reads see the request's cookies
/// overlaid with any changes made during this request; the changes become
/// `Set-Cookie` headers through [`CookieSession::into_cookies`].
pub struct CookieSession<'a> {
    req: &'a HttpRequest,
    changes: HashMap<String, Option<String>>,
}

impl<'a> CookieSession<'a> {
    pub fn new(req: &'a HttpRequest) -> Self {
        Self {
            req,
            changes: HashMap::new(),
        }
    }

    pub fn into_cookies(self) -> Vec<Cookie<'static>> {
        self.changes
            .into_iter()
            .map(|(key, value)| {
                let mut cookie = Cookie::build(key, value.clone().unwrap_or_default())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish();
                if value.is_none() {
                    cookie.make_removal();
                }
                cookie
            })
            .collect()
    }
}

impl SessionStore for CookieSession<'_> {
    fn get(&self, key: &str) -> Option<String> {
        match self.changes.get(key) {
            Some(changed) => changed.clone(),
            None => self
                .req
                .cookie(key)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.changes.insert(key.to_string(), Some(value.to_string()));
    }

    fn clear(&mut self, key: &str) {
        self.changes.insert(key.to_string(), None);
    }
}

/// Remembers where the handler should send the browser next.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    location: Option<String>,
}

impl RedirectNavigator {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for RedirectNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }
}
