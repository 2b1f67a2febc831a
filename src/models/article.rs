use serde::{Deserialize, Serialize};

use super::ingest;

/// Label used on call-to-action buttons that do not carry their own.
pub const DEFAULT_CTA_BUTTON: &str = "Contact Us";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    #[serde(default, deserialize_with = "ingest::non_empty_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "ingest::image_url")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "ingest::sections")]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "ingest::non_empty_text")]
    pub heading: Option<String>,
    /// `{}` or `{"url": ""}` land here as `None` and take no float slot.
    #[serde(default, deserialize_with = "ingest::image_url")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "ingest::paragraphs")]
    pub content: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    #[serde(default, deserialize_with = "ingest::non_empty_text")]
    pub text: Option<String>,
    #[serde(
        default,
        rename = "buttonText",
        deserialize_with = "ingest::non_empty_text"
    )]
    pub button_text: Option<String>,
}

impl Cta {
    pub fn button_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or(DEFAULT_CTA_BUTTON)
    }
}

/// Sidebar entry pointing at another article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentBlogSummary {
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "ingest::image_url")]
    pub image: Option<String>,
}

impl RecentBlogSummary {
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

impl From<&Article> for RecentBlogSummary {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article
                .title
                .clone()
                .unwrap_or_else(|| article.slug.clone()),
            image: article.image.clone(),
        }
    }
}

impl Article {
    pub fn heading_count(&self) -> usize {
        self.sections.iter().filter(|s| s.heading.is_some()).count()
    }

    pub fn cta_button_label(&self) -> &str {
        self.cta
            .as_ref()
            .map(Cta::button_label)
            .unwrap_or(DEFAULT_CTA_BUTTON)
    }
}
