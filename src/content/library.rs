use std::collections::HashSet;
use std::path::Path;

use crate::common::ContentError;
use crate::models::{Article, RecentBlogSummary};

/// How many articles the blog sidebar lists.
pub const RECENT_LIMIT: usize = 4;

const BUILTIN_LIBRARY: &str = include_str!("../../data/blogs.json");

/// Read-only set of articles, kept in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct BlogLibrary {
    articles: Vec<Article>,
}

impl BlogLibrary {
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_LIBRARY)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Self::from_articles(articles)
    }

    pub fn from_articles(articles: Vec<Article>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if article.slug.trim().is_empty() {
                return Err(ContentError::MissingSlug(position));
            }
            if !seen.insert(article.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(article.slug.clone()));
            }
        }

        Ok(Self { articles })
    }

    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// First `limit` articles in library order.
    pub fn recent(&self, limit: usize) -> Vec<RecentBlogSummary> {
        self.articles
            .iter()
            .take(limit)
            .map(RecentBlogSummary::from)
            .collect()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
