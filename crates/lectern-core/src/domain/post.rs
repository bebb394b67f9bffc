//! Post entity and its validation/derivation pipeline.
//!
//! Validation and derivation are explicit, pure stages composed by the
//! service before persistence: [`PostInput::validated`] trims and checks the
//! incoming fields, [`Post::new`] applies the derivation rules (summary,
//! tag normalization, defaults). There are no implicit model hooks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 200;
pub const CONTENT_MIN: usize = 10;
pub const AUTHOR_MIN: usize = 2;
pub const AUTHOR_MAX: usize = 100;
pub const SUMMARY_MAX: usize = 300;
pub const TAGS_MAX: usize = 10;

/// Number of content characters kept when a summary is derived.
const SUMMARY_PREFIX: usize = 200;

/// Post entity - a single blog post document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub view_count: u64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a new post from validated input, applying the derivation stage:
    /// summary fallback, tag normalization, and defaults (`active = true`,
    /// `view_count = 0`).
    pub fn new(input: PostInput) -> Self {
        let now = Utc::now();
        let summary = match input.summary {
            Some(summary) if !summary.is_empty() => summary,
            _ => derive_summary(&input.content),
        };

        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            author: input.author,
            summary,
            tags: normalize_tags(&input.tags.unwrap_or_default()),
            view_count: 0,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation input for a post, prior to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub author: String,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostInput {
    /// Validation stage: trim every textual field, then check the field
    /// constraints. All violations are collected so the caller can report
    /// them together.
    pub fn validated(mut self) -> Result<Self, Vec<String>> {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        self.author = self.author.trim().to_string();
        self.summary = self.summary.map(|s| s.trim().to_string());

        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push("Title is required".to_string());
        } else if !in_range(&self.title, TITLE_MIN, TITLE_MAX) {
            errors.push(format!(
                "Title must be between {TITLE_MIN} and {TITLE_MAX} characters"
            ));
        }

        if self.content.is_empty() {
            errors.push("Content is required".to_string());
        } else if self.content.chars().count() < CONTENT_MIN {
            errors.push(format!("Content must be at least {CONTENT_MIN} characters"));
        }

        if self.author.is_empty() {
            errors.push("Author is required".to_string());
        } else if !in_range(&self.author, AUTHOR_MIN, AUTHOR_MAX) {
            errors.push(format!(
                "Author name must be between {AUTHOR_MIN} and {AUTHOR_MAX} characters"
            ));
        }

        if let Some(summary) = &self.summary {
            if summary.chars().count() > SUMMARY_MAX {
                errors.push(format!("Summary cannot exceed {SUMMARY_MAX} characters"));
            }
        }

        if let Some(tags) = &self.tags {
            if tags.len() > TAGS_MAX {
                errors.push(format!("A maximum of {TAGS_MAX} tags is allowed"));
            }
        }

        if errors.is_empty() { Ok(self) } else { Err(errors) }
    }
}

/// Field-level partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    /// Trim provided textual fields and normalize provided tags.
    pub fn trimmed(mut self) -> Self {
        self.title = self.title.map(|s| s.trim().to_string());
        self.content = self.content.map(|s| s.trim().to_string());
        self.author = self.author.map(|s| s.trim().to_string());
        self.summary = self.summary.map(|s| s.trim().to_string());
        self.tags = self.tags.map(|tags| normalize_tags(&tags));
        self
    }

    /// Merge the provided fields into `post`. The summary is deliberately
    /// not re-derived when `content` changes and `summary` is omitted; the
    /// stored summary stays as it was at creation time.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(summary) = self.summary {
            post.summary = summary;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.summary.is_none()
            && self.tags.is_none()
    }
}

/// Check the invariants of an already-trimmed post. Used by stores to
/// re-validate a merged document before persisting a partial update.
pub fn validate_post(post: &Post) -> Result<(), Vec<String>> {
    let input = PostInput {
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.clone(),
        summary: Some(post.summary.clone()),
        tags: Some(post.tags.clone()),
    };
    input.validated().map(|_| ())
}

/// First 200 characters of the content, with an ellipsis when truncated.
pub fn derive_summary(content: &str) -> String {
    let prefix: String = content.chars().take(SUMMARY_PREFIX).collect();
    if content.chars().count() > SUMMARY_PREFIX {
        format!("{prefix}...")
    } else {
        prefix
    }
}

/// Tags are stored trimmed and lower-cased, in the order given.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn in_range(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}
