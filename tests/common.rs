#![allow(dead_code)]

use tetrapress::models::*;
use tetrapress::session::Navigator;

pub fn heading(text: &str) -> Section {
    Section {
        heading: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn paragraphs(texts: &[&str]) -> Section {
    Section {
        content: Some(texts.iter().map(|t| t.to_string()).collect()),
        ..Default::default()
    }
}

pub fn image(url: &str, texts: &[&str]) -> Section {
    Section {
        image: Some(url.to_string()),
        content: if texts.is_empty() {
            None
        } else {
            Some(texts.iter().map(|t| t.to_string()).collect())
        },
        ..Default::default()
    }
}

pub fn join_cta() -> Cta {
    Cta {
        text: Some("Join".to_string()),
        button_text: None,
    }
}

pub fn article(sections: Vec<Section>, cta: Option<Cta>) -> Article {
    Article {
        slug: "fixture".to_string(),
        title: Some("Fixture".to_string()),
        image: None,
        sections,
        cta,
    }
}

pub fn get_seed_blogs() -> Vec<BlogEntry> {
    vec![
        BlogEntry::new(1, "Learn React"),
        BlogEntry::new(2, "Next.js Basics"),
    ]
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }
}
