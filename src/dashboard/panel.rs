use std::fmt;
use std::str::FromStr;

use crate::common::PanelError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Dashboard,
    Users,
    Leads,
    BlogManage,
    Blogs,
    Settings,
}

impl Panel {
    /// Sidebar order.
    pub const ALL: [Panel; 6] = [
        Self::Dashboard,
        Self::Users,
        Self::Leads,
        Self::BlogManage,
        Self::Blogs,
        Self::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Leads => "Leads",
            Self::BlogManage => "Blog Manage",
            Self::Blogs => "Blogs",
            Self::Settings => "Settings",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Leads => "leads",
            Self::BlogManage => "blog-manage",
            Self::Blogs => "blogs",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Panel {
    type Err = PanelError;

    /// Accepts either the URL slug or the sidebar label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PanelError::Unknown(s.to_string()))
    }
}
