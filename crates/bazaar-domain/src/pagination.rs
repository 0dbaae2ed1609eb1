//! Pagination, sort direction and list-query types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Desc,
    Asc,
}

/// Pagination parameters shared across all list endpoints.
///
/// - `per_page`: 1–100, default 25
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    25
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub page: u32,
    pub per_page: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            page: self.page,
            per_page: self.per_page,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// A requested ordering on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderField {
    pub field: String,
    pub sort: Sort,
}

/// Query-string driven list parameters.
///
/// `search`, `ordering`, `page` and `per-page` are reserved; every other
/// parameter is an exact-match field filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
    pub ordering: Vec<OrderField>,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in params {
            let key = key.into();
            let value = value.into();
            match key.as_str() {
                "search" => query.search = Some(value),
                "ordering" => query.ordering = parse_ordering(&value),
                // Unparseable pagination falls back to the defaults.
                "page" => query.page.page = value.parse().unwrap_or_else(|_| default_page()),
                "per-page" => {
                    query.page.per_page = value.parse().unwrap_or_else(|_| default_per_page())
                }
                _ => {
                    query.filters.insert(key, value);
                }
            }
        }
        query.page = query.page.clamped();
        query
    }

    /// Whitespace/comma separated search terms. Empty when no search was given.
    pub fn search_terms(&self) -> Vec<&str> {
        self.search
            .as_deref()
            .map(|search| {
                search
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|term| !term.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse_ordering(raw: &str) -> Vec<OrderField> {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| match field.strip_prefix('-') {
            Some(name) => OrderField {
                field: name.to_owned(),
                sort: Sort::Desc,
            },
            None => OrderField {
                field: field.to_owned(),
                sort: Sort::Asc,
            },
        })
        .collect()
}
