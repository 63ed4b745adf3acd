/// Drag-and-drop: drop position resolution and the tree/tab mutation a drop becomes
use crate::metadata::{Item, ItemKind};
use crate::tab_data::TabInfo;

/// What is being dragged
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    Tab(TabInfo),
    Bookmark(Item),
}

impl DragSource {
    pub fn card_key(&self) -> String {
        match self {
            DragSource::Tab(tab) => tab.card_key(),
            DragSource::Bookmark(item) => item.id.clone(),
        }
    }
}

/// At most one drag is in flight
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSource),
}

impl DragState {
    pub fn begin(&mut self, source: DragSource) {
        *self = DragState::Dragging(source);
    }

    /// End the drag, handing back what was dragged
    pub fn finish(&mut self) -> Option<DragSource> {
        match std::mem::take(self) {
            DragState::Dragging(source) => Some(source),
            DragState::Idle => None,
        }
    }

    pub fn source(&self) -> Option<&DragSource> {
        match self {
            DragState::Dragging(source) => Some(source),
            DragState::Idle => None,
        }
    }
}

/// The declared type of a container cards can be dropped into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropContainer {
    /// The window's tab strip
    Tabs,
    /// A bookmark folder (the board root for loose bookmarks)
    Folder(String),
    /// Read-only lists such as top sites
    External,
}

impl DropContainer {
    pub fn accepts(&self, source: &DragSource) -> bool {
        match (self, source) {
            (DropContainer::External, _) => false,
            (DropContainer::Tabs, DragSource::Tab(_)) => true,
            (DropContainer::Tabs, DragSource::Bookmark(_)) => false,
            (DropContainer::Folder(_), DragSource::Tab(tab)) => !tab.url.is_empty(),
            (DropContainer::Folder(_), DragSource::Bookmark(item)) => item.kind != ItemKind::Folder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of a rendered card, in viewport coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct CardRect {
    pub key: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPosition {
    End,
    Before(String),
    After(String),
}

/// Nearest card by distance to its center, ignoring the dragged card. The
/// drop goes before it when the pointer is left of its midline, after it
/// otherwise; an empty container appends.
pub fn resolve_drop_position(pointer: Point, cards: &[CardRect], dragged_key: &str) -> DropPosition {
    let nearest = cards
        .iter()
        .filter(|card| card.key != dragged_key)
        .map(|card| {
            let center = card.center();
            let distance = (pointer.x - center.x).hypot(pointer.y - center.y);
            (card, center, distance)
        })
        .min_by(|a, b| a.2.total_cmp(&b.2));

    match nearest {
        None => DropPosition::End,
        Some((card, center, _)) if pointer.x < center.x => DropPosition::Before(card.key.clone()),
        Some((card, _, _)) => DropPosition::After(card.key.clone()),
    }
}

/// A container's current contents, as needed to compute host indices
#[derive(Debug, Clone, Copy)]
pub enum DropTarget<'a> {
    Tabs(&'a [TabInfo]),
    Folder { id: &'a str, items: &'a [Item] },
    External,
}

/// The host mutation a drop turns into
#[derive(Debug, Clone, PartialEq)]
pub enum DropOperation {
    /// `index: None` appends
    CreateBookmark {
        parent_id: String,
        index: Option<u32>,
        title: String,
        url: String,
    },
    MoveBookmark {
        id: String,
        parent_id: String,
        index: Option<u32>,
    },
    /// `index: -1` moves to the end of the strip
    MoveTab { tab_id: i32, index: i32 },
}

pub fn plan_drop(source: &DragSource, target: DropTarget<'_>, position: &DropPosition) -> Option<DropOperation> {
    match (source, target) {
        (_, DropTarget::External) => None,
        (DragSource::Bookmark(_), DropTarget::Tabs(_)) => None,
        (DragSource::Tab(tab), DropTarget::Tabs(tabs)) => Some(DropOperation::MoveTab {
            tab_id: tab.id,
            index: tab_strip_index(tab, tabs, position),
        }),
        (DragSource::Tab(tab), DropTarget::Folder { id, items }) => {
            if tab.url.is_empty() {
                return None;
            }
            Some(DropOperation::CreateBookmark {
                parent_id: id.to_string(),
                index: folder_index(id, items, position),
                title: tab.title.clone(),
                url: tab.url.clone(),
            })
        }
        (DragSource::Bookmark(item), DropTarget::Folder { id, items }) => {
            if item.is_folder() {
                return None;
            }
            Some(DropOperation::MoveBookmark {
                id: item.id.clone(),
                parent_id: id.to_string(),
                index: folder_index(id, items, position),
            })
        }
    }
}

/// Host index inside `folder_id`. Cards flattened up from nested folders have
/// no position in this folder, so dropping next to them appends.
fn folder_index(folder_id: &str, items: &[Item], position: &DropPosition) -> Option<u32> {
    let (key, offset) = match position {
        DropPosition::End => return None,
        DropPosition::Before(key) => (key, 0),
        DropPosition::After(key) => (key, 1),
    };
    items
        .iter()
        .find(|item| &item.id == key)
        .filter(|item| item.parent_id.as_deref() == Some(folder_id))
        .and_then(|item| item.index)
        .map(|index| index + offset)
}

/// Tab indices are final positions, so moving right has to skip the slot the
/// tab vacates.
fn tab_strip_index(tab: &TabInfo, tabs: &[TabInfo], position: &DropPosition) -> i32 {
    let (key, offset) = match position {
        DropPosition::End => return -1,
        DropPosition::Before(key) => (key, 0),
        DropPosition::After(key) => (key, 1),
    };
    match tabs.iter().find(|t| &t.card_key() == key) {
        Some(neighbour) => {
            let index = neighbour.index + offset;
            if tab.index < index { index - 1 } else { index }
        }
        None => -1,
    }
}

fn insertion_index<T>(list: &[T], position: &DropPosition, key: impl Fn(&T) -> String) -> usize {
    let (target, offset) = match position {
        DropPosition::End => return list.len(),
        DropPosition::Before(target) => (target, 0),
        DropPosition::After(target) => (target, 1),
    };
    list.iter()
        .position(|entry| &key(entry) == target)
        .map(|i| i + offset)
        .unwrap_or(list.len())
}

/// Optimistically move a tab within the local tab list
pub fn reorder_tabs(tabs: &mut Vec<TabInfo>, tab_id: i32, position: &DropPosition) -> bool {
    let Some(from) = tabs.iter().position(|t| t.id == tab_id) else {
        return false;
    };
    let tab = tabs.remove(from);
    let to = insertion_index(tabs, position, TabInfo::card_key);
    tabs.insert(to, tab);
    for (i, tab) in tabs.iter_mut().enumerate() {
        tab.index = i as i32;
    }
    true
}

/// Optimistically place a card into a container's local list
pub fn insert_item(items: &mut Vec<Item>, item: Item, position: &DropPosition) {
    let to = insertion_index(items, position, |i: &Item| i.id.clone());
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(key: &str, left: f64) -> CardRect {
        CardRect {
            key: key.to_string(),
            left,
            top: 0.0,
            width: 100.0,
            height: 40.0,
        }
    }

    fn tab(id: i32, index: i32) -> TabInfo {
        TabInfo::new(id, format!("https://tab{}.example.com", id), format!("Tab {}", id), index)
    }

    fn item(id: &str, parent: &str, index: u32) -> Item {
        Item {
            id: id.to_string(),
            parent_id: Some(parent.to_string()),
            index: Some(index),
            title: format!("Item {}", id),
            url: Some(format!("https://{}.example.com", id)),
            kind: ItemKind::Bookmark,
            description: None,
            deadline: None,
            date_added: None,
        }
    }

    #[test]
    fn test_drag_state_machine() {
        let mut state = DragState::default();
        assert!(state.source().is_none());

        state.begin(DragSource::Tab(tab(3, 0)));
        assert_eq!(state.source().map(DragSource::card_key), Some("tab-3".to_string()));

        let source = state.finish();
        assert!(matches!(source, Some(DragSource::Tab(_))));
        assert_eq!(state, DragState::Idle);
        assert!(state.finish().is_none());
    }

    #[test]
    fn test_container_acceptance() {
        let tab_source = DragSource::Tab(tab(1, 0));
        let bookmark_source = DragSource::Bookmark(item("5", "1", 0));

        assert!(DropContainer::Tabs.accepts(&tab_source));
        assert!(!DropContainer::Tabs.accepts(&bookmark_source));
        assert!(DropContainer::Folder("1".to_string()).accepts(&tab_source));
        assert!(DropContainer::Folder("1".to_string()).accepts(&bookmark_source));
        assert!(!DropContainer::External.accepts(&tab_source));
        assert!(!DropContainer::External.accepts(&bookmark_source));
    }

    #[test]
    fn test_empty_container_appends() {
        let position = resolve_drop_position(Point { x: 10.0, y: 10.0 }, &[], "x");
        assert_eq!(position, DropPosition::End);
    }

    #[test]
    fn test_only_dragged_card_appends() {
        let cards = vec![card("a", 0.0)];
        let position = resolve_drop_position(Point { x: 10.0, y: 10.0 }, &cards, "a");
        assert_eq!(position, DropPosition::End);
    }

    #[test]
    fn test_nearest_card_left_half_inserts_before() {
        let cards = vec![card("a", 0.0), card("b", 200.0), card("c", 400.0)];
        let position = resolve_drop_position(Point { x: 220.0, y: 20.0 }, &cards, "x");
        assert_eq!(position, DropPosition::Before("b".to_string()));
    }

    #[test]
    fn test_nearest_card_right_half_inserts_after() {
        let cards = vec![card("a", 0.0), card("b", 200.0), card("c", 400.0)];
        let position = resolve_drop_position(Point { x: 290.0, y: 20.0 }, &cards, "x");
        assert_eq!(position, DropPosition::After("b".to_string()));
    }

    #[test]
    fn test_dragged_card_is_skipped() {
        let cards = vec![card("a", 0.0), card("b", 200.0)];
        let position = resolve_drop_position(Point { x: 60.0, y: 20.0 }, &cards, "a");
        assert_eq!(position, DropPosition::Before("b".to_string()));
    }

    #[test]
    fn test_tab_onto_folder_creates_bookmark() {
        let source = DragSource::Tab(tab(9, 4));
        let items = vec![item("5", "1", 0), item("6", "1", 1)];

        let op = plan_drop(
            &source,
            DropTarget::Folder { id: "1", items: &items },
            &DropPosition::After("5".to_string()),
        );

        assert_eq!(
            op,
            Some(DropOperation::CreateBookmark {
                parent_id: "1".to_string(),
                index: Some(1),
                title: "Tab 9".to_string(),
                url: "https://tab9.example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_bookmark_onto_folder_moves() {
        let source = DragSource::Bookmark(item("7", "1", 3));
        let items = vec![item("5", "20", 0), item("6", "20", 1)];

        let op = plan_drop(
            &source,
            DropTarget::Folder { id: "20", items: &items },
            &DropPosition::Before("6".to_string()),
        );

        assert_eq!(
            op,
            Some(DropOperation::MoveBookmark {
                id: "7".to_string(),
                parent_id: "20".to_string(),
                index: Some(1),
            })
        );
    }

    #[test]
    fn test_drop_next_to_nested_card_appends() {
        let source = DragSource::Bookmark(item("7", "1", 3));
        let items = vec![item("5", "20", 0), item("8", "21", 0)];

        let op = plan_drop(
            &source,
            DropTarget::Folder { id: "20", items: &items },
            &DropPosition::Before("8".to_string()),
        );

        assert!(matches!(op, Some(DropOperation::MoveBookmark { index: None, .. })));
    }

    #[test]
    fn test_bookmark_onto_tabs_is_noop() {
        let source = DragSource::Bookmark(item("7", "1", 3));
        let tabs = vec![tab(1, 0)];

        assert_eq!(plan_drop(&source, DropTarget::Tabs(&tabs), &DropPosition::End), None);
        assert_eq!(plan_drop(&source, DropTarget::External, &DropPosition::End), None);
    }

    #[test]
    fn test_folder_cannot_be_dragged_into_folder() {
        let mut folder = item("30", "1", 0);
        folder.kind = ItemKind::Folder;
        folder.url = None;
        let items = vec![];

        let op = plan_drop(
            &DragSource::Bookmark(folder),
            DropTarget::Folder { id: "1", items: &items },
            &DropPosition::End,
        );

        assert_eq!(op, None);
    }

    #[test]
    fn test_tab_reorder_indices() {
        let tabs = vec![tab(1, 0), tab(2, 1), tab(3, 2), tab(4, 3)];

        // Moving left: index is the neighbour's slot
        let op = plan_drop(
            &DragSource::Tab(tabs[3].clone()),
            DropTarget::Tabs(&tabs),
            &DropPosition::Before("tab-2".to_string()),
        );
        assert_eq!(op, Some(DropOperation::MoveTab { tab_id: 4, index: 1 }));

        // Moving right: account for the vacated slot
        let op = plan_drop(
            &DragSource::Tab(tabs[0].clone()),
            DropTarget::Tabs(&tabs),
            &DropPosition::After("tab-3".to_string()),
        );
        assert_eq!(op, Some(DropOperation::MoveTab { tab_id: 1, index: 2 }));

        let op = plan_drop(&DragSource::Tab(tabs[0].clone()), DropTarget::Tabs(&tabs), &DropPosition::End);
        assert_eq!(op, Some(DropOperation::MoveTab { tab_id: 1, index: -1 }));
    }

    #[test]
    fn test_reorder_tabs_locally() {
        let mut tabs = vec![tab(1, 0), tab(2, 1), tab(3, 2)];

        assert!(reorder_tabs(&mut tabs, 1, &DropPosition::After("tab-3".to_string())));

        let ids: Vec<i32> = tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(tabs[2].index, 2);
        assert!(!reorder_tabs(&mut tabs, 99, &DropPosition::End));
    }

    #[test]
    fn test_insert_item_locally() {
        let mut items = vec![item("5", "1", 0), item("6", "1", 1)];

        insert_item(&mut items, item("7", "2", 0), &DropPosition::Before("6".to_string()));
        insert_item(&mut items, item("8", "2", 1), &DropPosition::End);
        insert_item(&mut items, item("9", "2", 2), &DropPosition::After("missing".to_string()));

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "7", "6", "8", "9"]);
    }
}
