use serde::{Deserialize, Serialize};

pub type BlogId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users: u64,
    pub leads: u64,
    pub blogs: u64,
}

/// One point of the user-growth chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub id: BlogId,
    pub title: String,
}

impl BlogEntry {
    pub fn new(id: BlogId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
