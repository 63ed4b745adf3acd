/// The browser services the dashboard is a view over.
///
/// `ChromeApi` (see `bridge.rs`) forwards to `chrome.bookmarks`, `chrome.tabs`,
/// `chrome.storage.sync` and `chrome.topSites`. Every call is a single
/// request/response; there are no timeouts or retries.
use crate::bookmark::BookmarkNode;
use crate::error::ApiError;
use crate::tab_data::{TabInfo, TopSite};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Host API seam. The UI is single-threaded, so futures are not `Send`.
#[async_trait(?Send)]
pub trait BrowserApi {
    /// The full bookmark tree, starting at the invisible root
    async fn get_tree(&self) -> Result<Vec<BookmarkNode>>;

    /// Create a bookmark, or a folder when `url` is `None`
    async fn create_bookmark(&self, parent_id: &str, title: &str, url: Option<&str>, index: Option<u32>) -> Result<BookmarkNode>;

    /// Update title and, for leaves, url
    async fn update_bookmark(&self, id: &str, title: &str, url: Option<&str>) -> Result<BookmarkNode>;

    async fn remove_bookmark(&self, id: &str) -> Result<()>;

    /// Remove a folder and everything under it
    async fn remove_tree(&self, id: &str) -> Result<()>;

    async fn move_bookmark(&self, id: &str, parent_id: &str, index: Option<u32>) -> Result<BookmarkNode>;

    /// Tabs of the current window
    async fn query_tabs(&self) -> Result<Vec<TabInfo>>;

    async fn activate_tab(&self, tab_id: i32) -> Result<()>;

    async fn close_tab(&self, tab_id: i32) -> Result<()>;

    async fn move_tab(&self, tab_id: i32, index: i32) -> Result<()>;

    /// Read one key of the synced store; `None` when unset
    async fn get_storage(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Replace one key of the synced store wholesale
    async fn set_storage(&self, key: &str, value: serde_json::Value) -> Result<()>;

    async fn top_sites(&self) -> Result<Vec<TopSite>>;
}
