/// Site names and favicons for bookmark and tab cards
use url::Url;

/// Favicon service used when the browser gives no icon of its own
pub const FAVICON_ENDPOINT: &str = "https://www.google.com/s2/favicons";

/// Pixel size requested from the favicon service
pub const FAVICON_SIZE: u32 = 64;

/// Host of an http(s) URL, lowercased. `None` for other schemes
/// (`about:`, `chrome:`, `file:`) and for anything unparsable.
pub fn web_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.host_str().map(str::to_lowercase)
}

/// Short site name shown under a card title
///
/// Examples:
/// - https://www.google.com/search → google.com
/// - https://ai.microsoft.com → microsoft.com
/// - https://news.bbc.co.uk/article → bbc.co.uk
/// - http://localhost:3000 → localhost
pub fn site_label(url: &str) -> Option<String> {
    let host = web_host(url)?;
    if host == "localhost" || is_ip_address(&host) {
        return Some(host);
    }

    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() < 2 {
        return Some(host);
    }

    // Keep three labels for .co.uk / .com.au style suffixes
    let tld = parts[parts.len() - 1];
    let keep = if parts.len() >= 3 && tld.len() == 2 && matches!(parts[parts.len() - 2], "co" | "com") {
        3
    } else {
        2
    };

    Some(parts[parts.len() - keep..].join("."))
}

fn is_ip_address(host: &str) -> bool {
    host.starts_with('[') || host.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Favicon for a web URL, via the favicon service
pub fn favicon_url(url: &str) -> Option<String> {
    let host = web_host(url)?;
    let mut endpoint = Url::parse(FAVICON_ENDPOINT).ok()?;
    endpoint
        .query_pairs_mut()
        .append_pair("domain", &host)
        .append_pair("sz", &FAVICON_SIZE.to_string());
    Some(endpoint.to_string())
}

/// The browser's own icon when it has one, else [`favicon_url`]
pub fn card_icon(fav_icon_url: Option<&str>, url: &str) -> Option<String> {
    fav_icon_url
        .filter(|icon| !icon.is_empty())
        .map(str::to_string)
        .or_else(|| favicon_url(url))
}
