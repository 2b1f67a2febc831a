use std::sync::{Arc, Mutex};

use tetrapress::config::Config;
use tetrapress::content::{demo, BlogLibrary, LeadBook};

use crate::web::security::ContactThrottle;
use crate::web::views::ViewRegistry;

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<BlogLibrary>,
    pub views: Arc<ViewRegistry>,
    pub leads: Arc<Mutex<LeadBook>>,
    pub contact_throttle: Arc<ContactThrottle>,
}

impl AppState {
    pub fn new(config: &Config, library: BlogLibrary) -> Self {
        Self {
            library: Arc::new(library),
            views: Arc::new(ViewRegistry::new(demo::blogs(), config.view_idle)),
            leads: Arc::new(Mutex::new(LeadBook::new(demo::leads()))),
            contact_throttle: Arc::new(ContactThrottle::default()),
        }
    }
}
