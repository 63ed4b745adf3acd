/// Boards: top-level bookmark folders exposed as selectable workspaces
use crate::bookmark::BookmarkNode;
use crate::tree::find_node;
use serde::{Deserialize, Serialize};

/// The browser's native Bookmarks Bar. Always present, never deletable.
pub const DEFAULT_BOARD_ID: &str = "1";
pub const DEFAULT_BOARD_NAME: &str = "Bookmarks Bar";

/// The browser's "Other bookmarks" root, where new board folders go
pub const OTHER_BOOKMARKS_ID: &str = "2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

impl Board {
    pub fn new(id: &str, name: &str) -> Board {
        Board {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        self.id == DEFAULT_BOARD_ID
    }
}

pub fn default_boards() -> Vec<Board> {
    vec![Board::new(DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME)]
}

/// Resolve the folder to project. An unknown active id falls back to the
/// default board; `None` only when the default board is missing too.
pub fn resolve_active_board<'a>(tree: &'a [BookmarkNode], active_id: &str) -> Option<&'a BookmarkNode> {
    find_node(tree, active_id)
        .filter(|node| node.is_folder())
        .or_else(|| find_node(tree, DEFAULT_BOARD_ID).filter(|node| node.is_folder()))
}

/// Drop boards whose folder no longer exists in the tree. The default board
/// is always kept and always first.
pub fn prune_boards(boards: &[Board], tree: &[BookmarkNode]) -> Vec<Board> {
    let mut pruned: Vec<Board> = boards
        .iter()
        .filter(|board| !board.is_protected())
        .filter(|board| find_node(tree, &board.id).is_some_and(|node| node.is_folder()))
        .cloned()
        .collect();

    let default = boards
        .iter()
        .find(|board| board.is_protected())
        .cloned()
        .unwrap_or_else(|| Board::new(DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME));
    pruned.insert(0, default);

    pruned
}

/// Parent folder for a newly created board
pub fn board_parent_id(tree: &[BookmarkNode]) -> &'static str {
    if find_node(tree, OTHER_BOOKMARKS_ID).is_some_and(|node| node.is_folder()) {
        OTHER_BOOKMARKS_ID
    } else {
        DEFAULT_BOARD_ID
    }
}

pub fn rename_board(boards: &mut [Board], board_id: &str, name: &str) -> bool {
    boards
        .iter_mut()
        .find(|board| board.id == board_id)
        .map(|board| {
            board.name = name.to_string();
        })
        .is_some()
}

/// Remove a board entry. The default board is never removed.
pub fn remove_board(boards: &mut Vec<Board>, board_id: &str) -> bool {
    if board_id == DEFAULT_BOARD_ID {
        return false;
    }
    let original_len = boards.len();
    boards.retain(|board| board.id != board_id);
    boards.len() < original_len
}
