/// Out-of-band item metadata and its merge onto bookmark nodes
use crate::bookmark::BookmarkNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single discriminant for what a card is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Bookmark,
    Folder,
    Reminder,
    Note,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Bookmark => "Bookmark",
            ItemKind::Folder => "Folder",
            ItemKind::Reminder => "Reminder",
            ItemKind::Note => "Note",
        }
    }

    /// Stored `type` value
    pub fn key(&self) -> &'static str {
        match self {
            ItemKind::Bookmark => "bookmark",
            ItemKind::Folder => "folder",
            ItemKind::Reminder => "reminder",
            ItemKind::Note => "note",
        }
    }

    pub fn from_key(key: &str) -> Option<ItemKind> {
        ItemKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub const ALL: [ItemKind; 4] = [ItemKind::Bookmark, ItemKind::Folder, ItemKind::Reminder, ItemKind::Note];
}

/// Per-item metadata stored under the item's bookmark id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

/// The whole `bookmarkMetadata` blob: bookmark id -> entry.
///
/// Entries for bookmarks deleted outside the dashboard are kept; they are
/// simply never matched against the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataMap(BTreeMap<String, MetadataEntry>);

impl MetadataMap {
    pub fn new() -> Self {
        MetadataMap(BTreeMap::new())
    }

    pub fn get(&self, id: &str) -> Option<&MetadataEntry> {
        self.0.get(id)
    }

    pub fn upsert(&mut self, id: &str, entry: MetadataEntry) {
        self.0.insert(id.to_string(), entry);
    }

    pub fn remove(&mut self, id: &str) -> Option<MetadataEntry> {
        self.0.remove(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataEntry)> {
        self.0.iter()
    }

    /// Ids tagged as reminders, in key order
    pub fn reminder_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, entry)| entry.kind == Some(ItemKind::Reminder))
            .map(|(id, _)| id.as_str())
    }
}

/// A bookmark node with its metadata merged in, as the UI renders it
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub parent_id: Option<String>,
    pub index: Option<u32>,
    pub title: String,
    pub url: Option<String>,
    pub kind: ItemKind,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub date_added: Option<f64>,
}

impl Item {
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

/// Metadata `type` wins when present; otherwise the node's shape decides.
pub fn infer_kind(node: &BookmarkNode, entry: Option<&MetadataEntry>) -> ItemKind {
    match entry.and_then(|e| e.kind) {
        Some(kind) => kind,
        None if node.is_folder() => ItemKind::Folder,
        None => ItemKind::Bookmark,
    }
}

/// Merge `metadata[node.id]` onto a node. Title and url always come from the
/// bookmark; metadata only fills the fields a bookmark does not have.
pub fn merge(node: &BookmarkNode, metadata: &MetadataMap) -> Item {
    let entry = metadata.get(&node.id);

    Item {
        id: node.id.clone(),
        parent_id: node.parent_id.clone(),
        index: node.index,
        title: node.title.clone(),
        url: node.url.clone(),
        kind: infer_kind(node, entry),
        description: entry.and_then(|e| e.description.clone()),
        deadline: entry.and_then(|e| e.deadline.clone()),
        date_added: node.date_added,
    }
}
