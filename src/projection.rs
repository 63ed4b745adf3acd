/// Reminder and note pseudo-collections
use crate::bookmark::BookmarkNode;
use crate::countdown::parse_deadline;
use crate::metadata::{merge, Item, ItemKind, MetadataMap};
use crate::tree::{find_notes_folder, BoardView};
use std::cmp::Ordering;

/// Reminders of the active board, soonest deadline first.
///
/// Metadata ids that match nothing on the board are dropped silently.
/// Reminders without a usable deadline sort after every dated one.
pub fn get_reminders(view: &BoardView, metadata: &MetadataMap) -> Vec<Item> {
    let mut reminders: Vec<Item> = metadata
        .reminder_ids()
        .filter_map(|id| find_on_board(view, id))
        .cloned()
        .collect();

    reminders.sort_by(|a, b| compare_deadlines(a.deadline.as_deref(), b.deadline.as_deref()));
    reminders
}

fn find_on_board<'a>(view: &'a BoardView, id: &str) -> Option<&'a Item> {
    view.loose_bookmarks
        .iter()
        .find(|item| item.id == id)
        .or_else(|| {
            view.flat_folders
                .iter()
                .find_map(|folder| folder.items.iter().find(|item| item.id == id))
        })
}

fn compare_deadlines(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_deadline), b.and_then(parse_deadline)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Children of the notes folder, always tagged as notes
pub fn get_notes(tree: &[BookmarkNode], metadata: &MetadataMap) -> Vec<Item> {
    find_notes_folder(tree)
        .map(|folder| {
            folder
                .children()
                .iter()
                .map(|node| Item {
                    kind: ItemKind::Note,
                    ..merge(node, metadata)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Case-insensitive search over title, url and description. A blank query
/// matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [Some(item.title.as_str()), item.url.as_deref(), item.description.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    items.iter().filter(|item| matches_query(item, query)).cloned().collect()
}
