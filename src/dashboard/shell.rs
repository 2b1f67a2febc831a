use crate::models::BlogEntry;
use crate::session::{Navigator, SessionContext, SessionStore, LOGIN_ROUTE};

use super::blog_manage::{BlogDraft, BlogManager};
use super::confirm::Confirmation;
use super::panel::Panel;

/// State owned by whichever panel is currently mounted. It is rebuilt each
/// time a different panel is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PanelLocal {
    Stateless,
    BlogManage(BlogManager),
    Blogs(BlogDraft),
}

impl PanelLocal {
    fn mount(panel: Panel, seed_blogs: &[BlogEntry]) -> Self {
        match panel {
            Panel::BlogManage => Self::BlogManage(BlogManager::new(seed_blogs.to_vec())),
            Panel::Blogs => Self::Blogs(BlogDraft::default()),
            _ => Self::Stateless,
        }
    }
}

/// Admin dashboard UI state: which panel is visible and whether the logout
/// confirmation is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardShell {
    active: Panel,
    logout: Confirmation<()>,
    local: PanelLocal,
    seed_blogs: Vec<BlogEntry>,
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl DashboardShell {
    /// `seed_blogs` is the list the "Blog Manage" panel starts from each time
    /// it is mounted.
    pub fn new(seed_blogs: Vec<BlogEntry>) -> Self {
        let active = Panel::default();
        Self {
            active,
            logout: Confirmation::Idle,
            local: PanelLocal::mount(active, &seed_blogs),
            seed_blogs,
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.active
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn select_panel(&mut self, panel: Panel) {
        if self.active == panel {
            return;
        }

        log::debug!("dashboard panel {} -> {}", self.active, panel);
        self.active = panel;
        self.local = PanelLocal::mount(panel, &self.seed_blogs);
    }

    pub fn logout_confirm_visible(&self) -> bool {
        self.logout.is_pending()
    }

    pub fn request_logout(&mut self) {
        self.logout.request(());
    }

    pub fn cancel_logout(&mut self) {
        self.logout.cancel();
    }

    /// Clears the session and sends the navigator to the login route. There
    /// is no way back from here for this session.
    pub fn confirm_logout<S, N>(&mut self, session: &mut SessionContext<S>, navigator: &mut N)
    where
        S: SessionStore,
        N: Navigator + ?Sized,
    {
        self.logout.cancel();
        session.teardown();
        navigator.navigate_to(LOGIN_ROUTE);
    }

    pub fn blog_manager(&self) -> Option<&BlogManager> {
        match &self.local {
            PanelLocal::BlogManage(manager) => Some(manager),
            _ => None,
        }
    }

    pub fn blog_manager_mut(&mut self) -> Option<&mut BlogManager> {
        match &mut self.local {
            PanelLocal::BlogManage(manager) => Some(manager),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&BlogDraft> {
        match &self.local {
            PanelLocal::Blogs(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut BlogDraft> {
        match &mut self.local {
            PanelLocal::Blogs(draft) => Some(draft),
            _ => None,
        }
    }
}
