//! Cursor pagination parsed from the `Link` response header.
//!
//! Shopify paginates list endpoints with a header of the form:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2024-10/orders.json?limit=50&page_info=abc>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2024-10/orders.json?limit=50&page_info=def>; rel="next"
//! ```
//!
//! Each linked URL's query string is captured as [`PageOptions`], which
//! serializes back into exactly the same query parameters. Passing it as the
//! options of the next list call fetches the adjacent page.
//!
//! Parsing is all-or-nothing: if any entry is malformed (no angle brackets,
//! no `rel`, or a URL without a decodable query string), the whole header is
//! treated as absent and both directions report "no page".
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::clients::Pagination;
//!
//! let header = r#"<https://s.myshopify.com/admin/orders.json?limit=2&page_info=abc>; rel="next""#;
//! let pagination = Pagination::parse_link_header(header);
//!
//! let next = pagination.next.expect("next page");
//! assert_eq!(next.page_info(), Some("abc"));
//! assert_eq!(next.limit(), Some(2));
//! assert!(pagination.previous.is_none());
//!
//! let broken = Pagination::parse_link_header("<https://s.myshopify.com/admin/orders.json?page_info=abc>");
//! assert!(!broken.has_next());
//! ```

use serde::{Serialize, Serializer};

/// Query parameters of one page link, replayable as list options.
///
/// Serializes as the ordered list of `(key, value)` pairs so that repeated
/// keys survive query encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    params: Vec<(String, String)>,
}

impl PageOptions {
    /// Creates page options from decoded query pairs.
    #[must_use]
    pub fn new(params: Vec<(String, String)>) -> Self {
        Self { params }
    }

    /// Returns the value of a query parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the opaque page cursor.
    #[must_use]
    pub fn page_info(&self) -> Option<&str> {
        self.get("page_info")
    }

    /// Returns the page size, if the link carries one.
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.get("limit").and_then(|v| v.parse().ok())
    }

    /// Returns all query pairs in link order.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    fn parse_url(url: &str) -> Option<Self> {
        let url = url.split('#').next()?;
        let (_, query) = url.split_once('?')?;
        if query.is_empty() {
            return None;
        }

        let mut params = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            if key.is_empty() {
                return None;
            }
            params.push((key, decode_component(value)?));
        }

        if params.is_empty() {
            None
        } else {
            Some(Self { params })
        }
    }
}

impl Serialize for PageOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.params.serialize(serializer)
    }
}

/// Previous/next page links of a list response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options that fetch the previous page.
    pub previous: Option<PageOptions>,
    /// Options that fetch the next page.
    pub next: Option<PageOptions>,
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// Returns an empty `Pagination` when any entry is malformed.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        Self::try_parse(header_value).unwrap_or_else(|| {
            tracing::warn!("Ignoring malformed Link header: {}", header_value);
            Self::default()
        })
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    fn try_parse(header_value: &str) -> Option<Self> {
        let mut result = Self::default();

        for entry in split_entries(header_value) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let rest = entry.strip_prefix('<')?;
            let (url, params) = rest.split_once('>')?;

            let rel = params
                .split(';')
                .filter_map(|param| param.trim().split_once('='))
                .find(|(key, _)| key.trim().eq_ignore_ascii_case("rel"))
                .map(|(_, value)| value.trim().trim_matches('"'))?;

            let options = PageOptions::parse_url(url.trim())?;

            match rel {
                "next" => result.next = Some(options),
                "previous" | "prev" => result.previous = Some(options),
                _ => {}
            }
        }

        Some(result)
    }
}

/// Splits on commas that are not inside `<...>`.
fn split_entries(header_value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;

    for (index, ch) in header_value.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&header_value[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&header_value[start..]);
    entries
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
