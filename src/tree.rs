/// Bookmark tree walks and the board projection the dashboard renders
use crate::board::resolve_active_board;
use crate::bookmark::BookmarkNode;
use crate::metadata::{merge, Item, MetadataMap};

/// Title of the reserved folder holding notes
pub const NOTES_FOLDER_TITLE: &str = "TabStack Notes";

/// First node with `id`, depth-first pre-order
pub fn find_node<'a>(nodes: &'a [BookmarkNode], id: &str) -> Option<&'a BookmarkNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// First folder titled exactly [`NOTES_FOLDER_TITLE`]
pub fn find_notes_folder(nodes: &[BookmarkNode]) -> Option<&BookmarkNode> {
    for node in nodes {
        if is_notes_folder(node) {
            return Some(node);
        }
        if let Some(found) = find_notes_folder(node.children()) {
            return Some(found);
        }
    }
    None
}

fn is_notes_folder(node: &BookmarkNode) -> bool {
    node.is_folder() && node.title == NOTES_FOLDER_TITLE
}

/// A folder tile: the folder plus every leaf beneath it, flattened
#[derive(Debug, Clone, PartialEq)]
pub struct FolderView {
    pub folder: Item,
    pub items: Vec<Item>,
}

/// Derived collections for the active board, recomputed on every refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    /// Folder actually projected; differs from the configured one after a fallback
    pub board_id: Option<String>,
    pub flat_folders: Vec<FolderView>,
    pub loose_bookmarks: Vec<Item>,
    pub all_bookmarks: Vec<Item>,
}

impl BoardView {
    pub fn folder(&self, folder_id: &str) -> Option<&FolderView> {
        self.flat_folders.iter().find(|f| f.folder.id == folder_id)
    }

    pub fn folder_mut(&mut self, folder_id: &str) -> Option<&mut FolderView> {
        self.flat_folders.iter_mut().find(|f| f.folder.id == folder_id)
    }

    /// Cards shown in a drop container: the board root shows loose bookmarks
    pub fn container_items(&self, container_id: &str) -> Option<&[Item]> {
        if self.board_id.as_deref() == Some(container_id) {
            return Some(&self.loose_bookmarks);
        }
        self.folder(container_id).map(|f| f.items.as_slice())
    }

    pub fn container_items_mut(&mut self, container_id: &str) -> Option<&mut Vec<Item>> {
        if self.board_id.as_deref() == Some(container_id) {
            return Some(&mut self.loose_bookmarks);
        }
        self.folder_mut(container_id).map(|f| &mut f.items)
    }
}

/// Project the active board's subtree.
///
/// Direct sub-folders become folder tiles (the notes folder is skipped at
/// every depth); nested folders are not tiles of their own but their leaves
/// are collected into the enclosing tile. Leaves directly under the board
/// are loose bookmarks. Every leaf lands in `all_bookmarks` in pre-order.
pub fn process_bookmarks(tree: &[BookmarkNode], active_board_id: &str, metadata: &MetadataMap) -> BoardView {
    let board = match resolve_active_board(tree, active_board_id) {
        Some(board) => board,
        None => {
            log::warn!("No board folder found for {} or the default board", active_board_id);
            return BoardView::default();
        }
    };

    let mut view = BoardView {
        board_id: Some(board.id.clone()),
        ..Default::default()
    };

    for child in board.children() {
        if child.is_folder() {
            if is_notes_folder(child) {
                continue;
            }
            let mut items = Vec::new();
            collect_leaves(child, metadata, &mut items);
            view.all_bookmarks.extend(items.iter().cloned());
            view.flat_folders.push(FolderView {
                folder: merge(child, metadata),
                items,
            });
        } else if child.is_leaf() {
            let item = merge(child, metadata);
            view.all_bookmarks.push(item.clone());
            view.loose_bookmarks.push(item);
        }
    }

    view
}

fn collect_leaves(folder: &BookmarkNode, metadata: &MetadataMap, out: &mut Vec<Item>) {
    for child in folder.children() {
        if child.is_folder() {
            if !is_notes_folder(child) {
                collect_leaves(child, metadata, out);
            }
        } else if child.is_leaf() {
            out.push(merge(child, metadata));
        }
    }
}
