/// `BrowserApi` over the chrome.* extension APIs, via the newtab.js bridge
use crate::api::{self, BrowserApi};
use crate::bookmark::BookmarkNode;
use crate::error::ApiError;
use crate::tab_data::{TabInfo, TopSite};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/newtab.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getBookmarkTree() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createBookmark(details: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateBookmark(id: &str, changes: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeBookmark(id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeBookmarkTree(id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn moveBookmark(id: &str, destination: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn closeTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn moveTab(tab_id: i32, index: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTopSites() -> Result<JsValue, JsValue>;

    fn onStorageChanged(callback: &js_sys::Function);

    fn offStorageChanged(callback: &js_sys::Function);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDetails<'a> {
    parent_id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
}

#[derive(Serialize)]
struct UpdateChanges<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveDestination<'a> {
    parent_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
}

/// Message of a rejected chrome.* promise
fn js_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

fn to_js<T: Serialize>(value: &T) -> api::Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ApiError::Conversion(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> api::Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Conversion(e.to_string()))
}

/// The browser's own extension APIs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeApi;

#[async_trait(?Send)]
impl BrowserApi for ChromeApi {
    async fn get_tree(&self) -> api::Result<Vec<BookmarkNode>> {
        let tree = getBookmarkTree()
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))?;
        from_js(tree)
    }

    async fn create_bookmark(&self, parent_id: &str, title: &str, url: Option<&str>, index: Option<u32>) -> api::Result<BookmarkNode> {
        let details = to_js(&CreateDetails {
            parent_id,
            title,
            url,
            index,
        })?;
        let node = createBookmark(details)
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))?;
        from_js(node)
    }

    async fn update_bookmark(&self, id: &str, title: &str, url: Option<&str>) -> api::Result<BookmarkNode> {
        let changes = to_js(&UpdateChanges { title, url })?;
        let node = updateBookmark(id, changes)
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))?;
        from_js(node)
    }

    async fn remove_bookmark(&self, id: &str) -> api::Result<()> {
        removeBookmark(id)
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))
    }

    async fn remove_tree(&self, id: &str) -> api::Result<()> {
        removeBookmarkTree(id)
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))
    }

    async fn move_bookmark(&self, id: &str, parent_id: &str, index: Option<u32>) -> api::Result<BookmarkNode> {
        let destination = to_js(&MoveDestination { parent_id, index })?;
        let node = moveBookmark(id, destination)
            .await
            .map_err(|e| ApiError::Bookmarks(js_message(&e)))?;
        from_js(node)
    }

    async fn query_tabs(&self) -> api::Result<Vec<TabInfo>> {
        let tabs = getCurrentWindowTabs()
            .await
            .map_err(|e| ApiError::Tabs(js_message(&e)))?;
        from_js(tabs)
    }

    async fn activate_tab(&self, tab_id: i32) -> api::Result<()> {
        activateTab(tab_id)
            .await
            .map_err(|e| ApiError::Tabs(js_message(&e)))
    }

    async fn close_tab(&self, tab_id: i32) -> api::Result<()> {
        closeTab(tab_id)
            .await
            .map_err(|e| ApiError::Tabs(js_message(&e)))
    }

    async fn move_tab(&self, tab_id: i32, index: i32) -> api::Result<()> {
        moveTab(tab_id, index)
            .await
            .map_err(|e| ApiError::Tabs(js_message(&e)))
    }

    async fn get_storage(&self, key: &str) -> api::Result<Option<serde_json::Value>> {
        let value = getStorage(key)
            .await
            .map_err(|e| ApiError::Storage(js_message(&e)))?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            from_js(value).map(Some)
        }
    }

    async fn set_storage(&self, key: &str, value: serde_json::Value) -> api::Result<()> {
        let value = to_js(&value)?;
        setStorage(key, value)
            .await
            .map_err(|e| ApiError::Storage(js_message(&e)))
    }

    async fn top_sites(&self) -> api::Result<Vec<TopSite>> {
        let sites = getTopSites()
            .await
            .map_err(|e| ApiError::TopSites(js_message(&e)))?;
        from_js(sites)
    }
}

/// Listener on storage changes made by any dashboard instance. Unregisters on drop.
pub struct StorageSubscription {
    callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for StorageSubscription {
    fn drop(&mut self) {
        offStorageChanged(self.callback.as_ref().unchecked_ref());
    }
}

/// `on_change` receives the storage keys that changed
pub fn subscribe_storage_changes(mut on_change: impl FnMut(Vec<String>) + 'static) -> StorageSubscription {
    let callback = Closure::wrap(Box::new(move |keys: JsValue| {
        match serde_wasm_bindgen::from_value::<Vec<String>>(keys) {
            Ok(keys) => on_change(keys),
            Err(e) => log::warn!("Ignoring malformed storage change event: {:?}", e),
        }
    }) as Box<dyn FnMut(JsValue)>);

    onStorageChanged(callback.as_ref().unchecked_ref());

    StorageSubscription { callback }
}
