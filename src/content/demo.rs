//! Hard-coded dashboard data.

use crate::models::{BlogEntry, DashboardStats, GrowthPoint, Lead, UserRow};

pub fn stats() -> DashboardStats {
    DashboardStats {
        users: 1248,
        leads: 856,
        blogs: 38,
    }
}

pub fn user_growth() -> Vec<GrowthPoint> {
    [
        ("Jan", 400),
        ("Feb", 520),
        ("Mar", 680),
        ("Apr", 750),
        ("May", 890),
        ("Jun", 1050),
        ("Jul", 1248),
    ]
    .into_iter()
    .map(|(label, value)| GrowthPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

pub fn users() -> Vec<UserRow> {
    vec![
        UserRow {
            id: 1,
            name: "Rahul Sharma".into(),
            email: "rahul@gmail.com".into(),
        },
        UserRow {
            id: 2,
            name: "Priya Singh".into(),
            email: "priya@gmail.com".into(),
        },
    ]
}

pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: 1,
            name: "Vikas".into(),
            email: "vikas@gmail.com".into(),
            phone: "9876543210".into(),
            updated_at: "2026-01-16 12:30 PM".into(),
        },
        Lead {
            id: 2,
            name: "Anjali".into(),
            email: "anjali@gmail.com".into(),
            phone: "9123456780".into(),
            updated_at: "2026-01-16 01:10 PM".into(),
        },
    ]
}

pub fn blogs() -> Vec<BlogEntry> {
    vec![
        BlogEntry::new(1, "Learn React"),
        BlogEntry::new(2, "Next.js Basics"),
    ]
}
