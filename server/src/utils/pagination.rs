use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Raw paging parameters as they arrive in a query string.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page_number", alias = "pageNumber")]
    pub page_number: i64,
    #[serde(default = "default_page_size", alias = "pageSize")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    i64::from(DEFAULT_PAGE_NUMBER)
}

fn default_page_size() -> i64 {
    i64::from(DEFAULT_PAGE_SIZE)
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

/// A normalized, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Page numbers below 1 become 1; sizes below 1 fall back to the default
    /// and sizes above the cap are clamped.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let page_number = u32::try_from(page_number.max(1)).unwrap_or(u32::MAX);
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            u32::try_from(page_size.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE)
        };

        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(default_page_number(), default_page_size())
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        Self::new(query.page_number, query.page_size)
    }
}

/// One bounded slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        let page_size = u64::from(request.page_size());
        Self {
            items,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_count,
            total_pages: total_count.div_ceil(page_size),
        }
    }

    /// Cuts the requested page out of an already ordered collection.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let total_count = all.len() as u64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let items = all.into_iter().skip(skip).take(take).collect();

        Self::new(items, request, total_count)
    }
}
