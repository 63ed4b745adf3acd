/// Bookmark tree snapshot as returned by chrome.bookmarks.getTree
use serde::{Deserialize, Serialize};

/// A node of the browser's bookmark tree.
///
/// The browser owns these; the dashboard only holds the snapshot fetched on
/// the last refresh. A node is a folder iff `children` is present (even when
/// empty) and a leaf iff it has a `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<f64>,
}

impl BookmarkNode {
    pub fn folder(id: &str, title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        let mut node = BookmarkNode {
            id: id.to_string(),
            title: title.to_string(),
            url: None,
            children: Some(children),
            parent_id: None,
            index: None,
            date_added: None,
        };
        node.adopt_children();
        node
    }

    pub fn leaf(id: &str, title: &str, url: &str) -> BookmarkNode {
        BookmarkNode {
            id: id.to_string(),
            title: title.to_string(),
            url: Some(url.to_string()),
            children: None,
            parent_id: None,
            index: None,
            date_added: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none() && self.url.is_some()
    }

    pub fn children(&self) -> &[BookmarkNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Rewrite `parent_id` and `index` of the direct children to match their position
    pub fn adopt_children(&mut self) {
        let parent_id = self.id.clone();
        if let Some(children) = self.children.as_mut() {
            for (i, child) in children.iter_mut().enumerate() {
                child.parent_id = Some(parent_id.clone());
                child.index = Some(i as u32);
            }
        }
    }
}
