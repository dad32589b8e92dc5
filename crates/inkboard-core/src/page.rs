//! Pages and the multi-page document.

use crate::color::Rgba;
use crate::element::Element;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single page of the whiteboard.
///
/// Element order is z-order: later elements draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Uuid,
    pub label: String,
    pub elements: Vec<Element>,
    pub background_color: Rgba,
}

impl Page {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            elements: Vec::new(),
            background_color: Rgba::WHITE,
        }
    }

    pub fn with_background(label: impl Into<String>, background_color: Rgba) -> Self {
        Self {
            background_color,
            ..Self::new(label)
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new("Page 1")
    }
}

/// Document model containing all pages.
///
/// Invariants: at least one page exists, and `current_page_index` is a
/// valid index into `pages`. Construction and [`Document::normalize`]
/// maintain them; the whiteboard operations never break them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub pages: Vec<Page>,
    pub current_page_index: usize,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Document {
    /// A fresh single-page document.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            pages: vec![Page::default()],
            current_page_index: 0,
            created_at: now,
            modified_at: now,
        }
    }

    /// Re-establish the structural invariants on externally produced data
    /// (a decoded file may carry zero pages or an out-of-range index).
    pub fn normalize(&mut self) {
        if self.pages.is_empty() {
            log::warn!("document had no pages, inserting an empty one");
            self.pages.push(Page::default());
        }
        if self.current_page_index >= self.pages.len() {
            log::warn!(
                "current page index {} out of range, clamping to {}",
                self.current_page_index,
                self.pages.len() - 1
            );
            self.current_page_index = self.pages.len() - 1;
        }
    }

    /// Record a modification instant.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page_index.min(self.pages.len() - 1)]
    }

    pub fn current_page_mut(&mut self) -> &mut Page {
        let index = self.current_page_index.min(self.pages.len() - 1);
        &mut self.pages[index]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
