use crate::config::SearchConfig;
use shared_types::{Job, JobQuery, JobsPage, PageMeta};

/// Page cursor resolved from the raw query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

/// Positive integer or nothing. Zero, negatives and junk all fall back.
fn parse_positive(value: Option<&String>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}

pub fn total_pages(total_items: u32, size: u32) -> u32 {
    if total_items == 0 || size == 0 {
        0
    } else {
        total_items.div_ceil(size)
    }
}

impl PageRequest {
    pub fn from_query(query: &JobQuery, config: &SearchConfig) -> Self {
        let max_size = config.max_page_size.map_or(u32::MAX, |max| max.max(1));
        let default_size = config.default_page_size.clamp(1, max_size);

        let page = parse_positive(query.page.as_ref()).unwrap_or(1);
        let size = parse_positive(query.size.as_ref())
            .unwrap_or(default_size)
            .min(max_size);

        Self { page, size }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.size as usize)
    }

    /// Slice `matched` down to this page and compute the metadata.
    pub fn paginate(&self, matched: Vec<Job>) -> JobsPage {
        let total_items = u32::try_from(matched.len()).unwrap_or(u32::MAX);

        let items = matched
            .into_iter()
            .skip(self.offset())
            .take(self.size as usize)
            .collect();

        JobsPage {
            items,
            meta: PageMeta {
                page: self.page,
                size: self.size,
                total_items,
                total_pages: total_pages(total_items, self.size),
            },
        }
    }
}
