//! Page arithmetic shared by every paged list.

use serde::{Deserialize, Serialize};

/// `max(1, ceil(total / limit))`; a zero limit counts as 1.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = total.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Position within a paged list and the state of its previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    /// Clamps `current` into `[1, total_pages]`.
    pub fn new(current: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current: current.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn from_total(current: u32, total: u64, limit: u32) -> Self {
        Self::new(current, total_pages(total, limit))
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn previous_disabled(&self) -> bool {
        !self.has_previous()
    }

    pub fn next_disabled(&self) -> bool {
        !self.has_next()
    }

    pub fn previous(&self) -> u32 {
        self.current.saturating_sub(1).clamp(1, self.total_pages)
    }

    pub fn next(&self) -> u32 {
        self.current.saturating_add(1).clamp(1, self.total_pages)
    }

    /// Single-page lists render no pager.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total_pages)
    }
}
