// src/domain/pagination.rs
use serde::Serialize;

const DEFAULT_PATH: &str = "/";
const PAGE_NAME: &str = "page";

/// One page of a result set whose total length is known.
///
/// The pagination source computes the numbers; this type only carries them
/// and renders the `links` / `meta` blocks of a paginated response.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthAwarePaginator<T> {
    items: Vec<T>,
    total: u64,
    per_page: u64,
    current_page: u64,
    path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub from: Option<u64>,
    pub last_page: u64,
    pub path: String,
    pub per_page: u64,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> LengthAwarePaginator<T> {
    /// `per_page` and `current_page` are clamped to at least 1.
    pub fn new(items: Vec<T>, total: u64, per_page: u64, current_page: u64) -> Self {
        Self {
            items,
            total,
            per_page: per_page.max(1),
            current_page: current_page.max(1),
            path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn set_path_if_missing(&mut self, path: &str) {
        if self.path.is_none() {
            self.path = Some(path.to_owned());
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    pub const fn last_page(&self) -> u64 {
        let pages = self.total.div_ceil(self.per_page);
        if pages == 0 { 1 } else { pages }
    }

    pub const fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    /// 1-based index of the first item on this page, `None` when the page
    /// is empty or the index does not fit in a `u64`.
    pub fn from(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        (self.current_page - 1)
            .checked_mul(self.per_page)?
            .checked_add(1)
    }

    /// 1-based index of the last item on this page.
    pub fn to(&self) -> Option<u64> {
        let len = u64::try_from(self.items.len()).ok()?;
        self.from()?.checked_add(len - 1)
    }

    pub fn url(&self, page: u64) -> String {
        format!("{}?{PAGE_NAME}={}", self.path(), page.max(1))
    }

    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }

    pub fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page + 1))
    }

    pub fn links(&self) -> PaginationLinks {
        PaginationLinks {
            first: self.url(1),
            last: self.url(self.last_page()),
            prev: self.previous_page_url(),
            next: self.next_page_url(),
        }
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            current_page: self.current_page,
            from: self.from(),
            last_page: self.last_page(),
            path: self.path().to_owned(),
            per_page: self.per_page,
            to: self.to(),
            total: self.total,
        }
    }

    /// Replace the items, keeping every piece of page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> LengthAwarePaginator<U> {
        LengthAwarePaginator {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            path: self.path,
        }
    }

    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<LengthAwarePaginator<U>, E> {
        Ok(LengthAwarePaginator {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            path: self.path,
        })
    }
}
