/// In-memory browser for tests: a bookmark tree, a tab strip and a key-value
/// store behaving like their chrome.* counterparts.
use crate::api::{BrowserApi, Result};
use crate::bookmark::BookmarkNode;
use crate::error::ApiError;
use crate::tab_data::{TabInfo, TopSite};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub struct MemoryBrowser {
    tree: RefCell<Vec<BookmarkNode>>,
    tabs: RefCell<Vec<TabInfo>>,
    storage: RefCell<HashMap<String, serde_json::Value>>,
    top_sites: RefCell<Vec<TopSite>>,
    next_id: Cell<u32>,
    /// Every mutating call, e.g. `create:1:Docs`
    pub calls: RefCell<Vec<String>>,
    /// Make bookmark and tab moves fail
    pub fail_moves: Cell<bool>,
}

impl MemoryBrowser {
    /// A root with the Bookmarks Bar ("1") and Other bookmarks ("2")
    pub fn new() -> Self {
        Self::with_tree(vec![
            BookmarkNode::folder("1", "Bookmarks Bar", vec![]),
            BookmarkNode::folder("2", "Other bookmarks", vec![]),
        ])
    }

    /// `roots` become children of the invisible root "0"
    pub fn with_tree(roots: Vec<BookmarkNode>) -> Self {
        let mut root = BookmarkNode::folder("0", "", roots);
        reindex(&mut root);
        Self {
            tree: RefCell::new(vec![root]),
            tabs: RefCell::new(Vec::new()),
            storage: RefCell::new(HashMap::new()),
            top_sites: RefCell::new(Vec::new()),
            next_id: Cell::new(1000),
            calls: RefCell::new(Vec::new()),
            fail_moves: Cell::new(false),
        }
    }

    pub fn with_tabs(self, tabs: Vec<TabInfo>) -> Self {
        *self.tabs.borrow_mut() = tabs;
        self.reindex_tabs();
        self
    }

    pub fn with_top_sites(self, sites: Vec<TopSite>) -> Self {
        *self.top_sites.borrow_mut() = sites;
        self
    }

    pub fn set_stored(&self, key: &str, value: serde_json::Value) {
        self.storage.borrow_mut().insert(key.to_string(), value);
    }

    pub fn stored(&self, key: &str) -> Option<serde_json::Value> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn node(&self, id: &str) -> Option<BookmarkNode> {
        crate::tree::find_node(&self.tree.borrow(), id).cloned()
    }

    pub fn tabs(&self) -> Vec<TabInfo> {
        self.tabs.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }

    fn reindex_tabs(&self) {
        for (i, tab) in self.tabs.borrow_mut().iter_mut().enumerate() {
            tab.index = i as i32;
        }
    }
}

fn reindex(node: &mut BookmarkNode) {
    node.adopt_children();
    if let Some(children) = node.children.as_mut() {
        children.iter_mut().for_each(reindex);
    }
}

fn find_mut<'a>(nodes: &'a mut [BookmarkNode], id: &str) -> Option<&'a mut BookmarkNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = find_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn detach(nodes: &mut Vec<BookmarkNode>, id: &str) -> Option<BookmarkNode> {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(pos));
    }
    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = detach(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn not_found(id: &str) -> ApiError {
    ApiError::Bookmarks(format!("Can't find bookmark for id {}", id))
}

#[async_trait(?Send)]
impl BrowserApi for MemoryBrowser {
    async fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        Ok(self.tree.borrow().clone())
    }

    async fn create_bookmark(&self, parent_id: &str, title: &str, url: Option<&str>, index: Option<u32>) -> Result<BookmarkNode> {
        self.record(format!("create:{}:{}", parent_id, title));
        let id = self.next_id();
        let node = match url {
            Some(url) => BookmarkNode::leaf(&id, title, url),
            None => BookmarkNode::folder(&id, title, vec![]),
        };

        let mut tree = self.tree.borrow_mut();
        let parent = find_mut(&mut tree, parent_id)
            .filter(|p| p.is_folder())
            .ok_or_else(|| not_found(parent_id))?;
        let children = parent.children.get_or_insert_with(Vec::new);
        let at = index.map(|i| (i as usize).min(children.len())).unwrap_or(children.len());
        children.insert(at, node);
        parent.adopt_children();

        Ok(parent.children()[at].clone())
    }

    async fn update_bookmark(&self, id: &str, title: &str, url: Option<&str>) -> Result<BookmarkNode> {
        self.record(format!("update:{}:{}", id, title));
        let mut tree = self.tree.borrow_mut();
        let node = find_mut(&mut tree, id).ok_or_else(|| not_found(id))?;
        node.title = title.to_string();
        if let Some(url) = url {
            node.url = Some(url.to_string());
        }
        Ok(node.clone())
    }

    async fn remove_bookmark(&self, id: &str) -> Result<()> {
        self.record(format!("remove:{}", id));
        let mut tree = self.tree.borrow_mut();
        if crate::tree::find_node(&tree, id).is_some_and(|n| !n.children().is_empty()) {
            return Err(ApiError::Bookmarks("Can't remove non-empty folder".to_string()));
        }
        detach(&mut tree, id).ok_or_else(|| not_found(id))?;
        tree.iter_mut().for_each(reindex);
        Ok(())
    }

    async fn remove_tree(&self, id: &str) -> Result<()> {
        self.record(format!("removeTree:{}", id));
        let mut tree = self.tree.borrow_mut();
        detach(&mut tree, id).ok_or_else(|| not_found(id))?;
        tree.iter_mut().for_each(reindex);
        Ok(())
    }

    async fn move_bookmark(&self, id: &str, parent_id: &str, index: Option<u32>) -> Result<BookmarkNode> {
        self.record(format!("move:{}:{}", id, parent_id));
        if self.fail_moves.get() {
            return Err(ApiError::Bookmarks("move rejected".to_string()));
        }
        let mut tree = self.tree.borrow_mut();
        let node = detach(&mut tree, id).ok_or_else(|| not_found(id))?;
        // chrome reads `index` against the folder before the node left it
        let index = match (node.parent_id.as_deref(), node.index, index) {
            (Some(old_parent), Some(old_index), Some(index)) if old_parent == parent_id && index > old_index => {
                Some(index - 1)
            }
            (_, _, index) => index,
        };
        let parent = find_mut(&mut tree, parent_id)
            .filter(|p| p.is_folder())
            .ok_or_else(|| not_found(parent_id))?;
        let children = parent.children.get_or_insert_with(Vec::new);
        let at = index.map(|i| (i as usize).min(children.len())).unwrap_or(children.len());
        children.insert(at, node);
        parent.adopt_children();
        let moved = parent.children()[at].clone();
        tree.iter_mut().for_each(reindex);
        Ok(moved)
    }

    async fn query_tabs(&self) -> Result<Vec<TabInfo>> {
        Ok(self.tabs.borrow().clone())
    }

    async fn activate_tab(&self, tab_id: i32) -> Result<()> {
        self.record(format!("activate:{}", tab_id));
        if self.tabs.borrow().iter().any(|t| t.id == tab_id) {
            Ok(())
        } else {
            Err(ApiError::Tabs(format!("No tab with id: {}", tab_id)))
        }
    }

    async fn close_tab(&self, tab_id: i32) -> Result<()> {
        self.record(format!("closeTab:{}", tab_id));
        self.tabs.borrow_mut().retain(|t| t.id != tab_id);
        self.reindex_tabs();
        Ok(())
    }

    async fn move_tab(&self, tab_id: i32, index: i32) -> Result<()> {
        self.record(format!("moveTab:{}:{}", tab_id, index));
        if self.fail_moves.get() {
            return Err(ApiError::Tabs("move rejected".to_string()));
        }
        {
            let mut tabs = self.tabs.borrow_mut();
            let from = tabs
                .iter()
                .position(|t| t.id == tab_id)
                .ok_or_else(|| ApiError::Tabs(format!("No tab with id: {}", tab_id)))?;
            let tab = tabs.remove(from);
            let to = if index < 0 { tabs.len() } else { (index as usize).min(tabs.len()) };
            tabs.insert(to, tab);
        }
        self.reindex_tabs();
        Ok(())
    }

    async fn get_storage(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.storage.borrow().get(key).cloned())
    }

    async fn set_storage(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.record(format!("set:{}", key));
        self.storage.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    async fn top_sites(&self) -> Result<Vec<TopSite>> {
        Ok(self.top_sites.borrow().clone())
    }
}
