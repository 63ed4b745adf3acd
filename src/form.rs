/// Edit/create form validation and the bookmark writes it turns into
use crate::bookmark::BookmarkNode;
use crate::error::FormError;
use crate::metadata::{Item, ItemKind, MetadataEntry};
use crate::storage::SidebarTarget;
use crate::tree::find_node;
use regex::Regex;
use std::sync::LazyLock;

/// Stored as the url of reminders and notes that have no link of their own
pub const NO_URL: &str = "about:blank";

static SCHEME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").ok());

/// Raw field values of the edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub title: String,
    pub url: String,
    pub description: String,
    pub deadline: String,
    pub kind: ItemKind,
}

impl Default for ItemForm {
    fn default() -> Self {
        ItemForm {
            title: String::new(),
            url: String::new(),
            description: String::new(),
            deadline: String::new(),
            kind: ItemKind::Bookmark,
        }
    }
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub title: String,
    /// `None` for folders
    pub url: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub kind: ItemKind,
}

impl ValidItem {
    pub fn metadata(&self) -> MetadataEntry {
        MetadataEntry {
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            kind: Some(self.kind),
        }
    }
}

impl ItemForm {
    pub fn new(kind: ItemKind) -> Self {
        ItemForm {
            kind,
            ..Default::default()
        }
    }

    /// Prefill for editing an existing card
    pub fn from_item(item: &Item) -> Self {
        let url = match item.url.as_deref() {
            Some(NO_URL) | None => String::new(),
            Some(url) => url.to_string(),
        };
        ItemForm {
            title: item.title.clone(),
            url,
            description: item.description.clone().unwrap_or_default(),
            deadline: item.deadline.clone().unwrap_or_default(),
            kind: item.kind,
        }
    }

    /// Checks run in order: title, reminder/note url default, url presence,
    /// then scheme normalization.
    pub fn validate(&self) -> Result<ValidItem, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let mut url = self.url.trim().to_string();
        if url.is_empty() && matches!(self.kind, ItemKind::Reminder | ItemKind::Note) {
            url = NO_URL.to_string();
        }

        let url = if self.kind == ItemKind::Folder {
            None
        } else if url.is_empty() {
            return Err(FormError::MissingUrl);
        } else {
            Some(normalize_url(&url))
        };

        Ok(ValidItem {
            title: title.to_string(),
            url,
            description: non_empty(&self.description),
            deadline: non_empty(&self.deadline),
            kind: self.kind,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Prefix `https://` when the url has no scheme separator
pub fn normalize_url(url: &str) -> String {
    if url == NO_URL || SCHEME.as_ref().is_some_and(|scheme| scheme.is_match(url)) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Folder a new card is created in: the selected folder when it still exists,
/// otherwise the board root (pseudo targets like tabs or reminders).
pub fn resolve_parent(target: &SidebarTarget, tree: &[BookmarkNode], board_id: &str) -> String {
    match target {
        SidebarTarget::Folder(id) if find_node(tree, id).is_some_and(|node| node.is_folder()) => id.clone(),
        _ => board_id.to_string(),
    }
}

/// The bookmark write a saved form turns into
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create {
        parent_id: String,
        title: String,
        url: Option<String>,
    },
    Update {
        id: String,
        title: String,
        url: Option<String>,
    },
}

pub fn plan_save(item: &ValidItem, editing: Option<&str>, parent_id: &str) -> SaveRequest {
    match editing {
        Some(id) => SaveRequest::Update {
            id: id.to_string(),
            title: item.title.clone(),
            url: item.url.clone(),
        },
        None => SaveRequest::Create {
            parent_id: parent_id.to_string(),
            title: item.title.clone(),
            url: item.url.clone(),
        },
    }
}
