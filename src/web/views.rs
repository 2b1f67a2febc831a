use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

use tetrapress::dashboard::DashboardShell;
use tetrapress::models::BlogEntry;

/// Cookie naming the dashboard view a browser tab is bound to.
pub const VIEW_COOKIE: &str = "td_view";

struct ViewEntry {
    shell: DashboardShell,
    last_seen: Instant,
}

/// Per-view dashboard state. A view is mounted on first visit, touched by
/// every request carrying its cookie, and dropped on logout or when idle.
pub struct ViewRegistry {
    views: Mutex<HashMap<Uuid, ViewEntry>>,
    seed_blogs: Vec<BlogEntry>,
    idle: Duration,
}

impl ViewRegistry {
    pub fn new(seed_blogs: Vec<BlogEntry>, idle: Duration) -> Self {
        Self {
            views: Mutex::new(HashMap::new()),
            seed_blogs,
            idle,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, ViewEntry>> {
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs `f` against the view named by `id`, mounting a fresh view when
    /// the id is missing, unknown or expired. Returns the id actually used and
    /// whether it was mounted by this call.
    pub fn with_view<R>(
        &self,
        id: Option<Uuid>,
        f: impl FnOnce(&mut DashboardShell) -> R,
    ) -> (Uuid, bool, R) {
        let now = Instant::now();
        let idle = self.idle;
        let mut views = self.lock();

        // Drop idle views.
        views.retain(|_, entry| now.duration_since(entry.last_seen) < idle);

        let live = id.filter(|id| views.contains_key(id));
        let mounted = live.is_none();
        let id = live.unwrap_or_else(Uuid::new_v4);

        let entry = views.entry(id).or_insert_with(|| ViewEntry {
            shell: DashboardShell::new(self.seed_blogs.clone()),
            last_seen: now,
        });
        entry.last_seen = now;

        if mounted {
            log::debug!("mounted dashboard view {id}");
        }

        (id, mounted, f(&mut entry.shell))
    }

    pub fn unmount(&self, id: Uuid) -> Option<DashboardShell> {
        self.lock().remove(&id).map(|entry| entry.shell)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
