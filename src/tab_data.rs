/// Data structures for browser tabs and top sites
use serde::{Deserialize, Serialize};

/// Information about a browser tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub index: i32,
}

impl TabInfo {
    pub fn new(id: i32, url: String, title: String, index: i32) -> TabInfo {
        TabInfo {
            id,
            url,
            title,
            fav_icon_url: None,
            pinned: false,
            index,
        }
    }

    /// Key used to tell tab cards apart from bookmark cards in a drop container
    pub fn card_key(&self) -> String {
        tab_card_key(self.id)
    }
}

pub fn tab_card_key(id: i32) -> String {
    format!("tab-{}", id)
}

/// An entry from the browser's most-visited list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSite {
    pub title: String,
    pub url: String,
}

/// Number of top sites the dashboard shows
pub const TOP_SITES_LIMIT: usize = 10;

pub fn cap_top_sites(mut sites: Vec<TopSite>) -> Vec<TopSite> {
    sites.truncate(TOP_SITES_LIMIT);
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new(1, "https://google.com".to_string(), "Google".to_string(), 0);

        assert_eq!(tab.id, 1);
        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.fav_icon_url, None);
        assert_eq!(tab.index, 0);
        assert_eq!(tab.card_key(), "tab-1");
    }

    #[test]
    fn test_deserialize_chrome_tab() {
        let json = r#"{"id":7,"url":"https://docs.rs","title":"Docs","favIconUrl":"https://docs.rs/favicon.ico","pinned":true,"index":3,"active":false}"#;
        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, 7);
        assert_eq!(tab.fav_icon_url.as_deref(), Some("https://docs.rs/favicon.ico"));
        assert!(tab.pinned);
        assert_eq!(tab.index, 3);
    }

    #[test]
    fn test_deserialize_tab_without_url() {
        // Tabs still loading may not expose a url yet
        let tab: TabInfo = serde_json::from_str(r#"{"id":2}"#).unwrap();
        assert_eq!(tab.url, "");
        assert_eq!(tab.index, 0);
    }

    #[test]
    fn test_cap_top_sites() {
        let sites: Vec<TopSite> = (0..15)
            .map(|i| TopSite {
                title: format!("Site {}", i),
                url: format!("https://site{}.com", i),
            })
            .collect();

        let capped = cap_top_sites(sites);

        assert_eq!(capped.len(), TOP_SITES_LIMIT);
        assert_eq!(capped[9].title, "Site 9");
    }
}
