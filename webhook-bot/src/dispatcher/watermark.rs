//! Update ordering guard.

use std::sync::atomic::{AtomicI64, Ordering};

use webhook_core::{Result, WebhookError};

/// Highest update id accepted so far. Starts at zero.
///
/// [`Watermark::advance`] is a compare-and-swap loop, so concurrent requests observe a single
/// total order of accepted ids.
#[derive(Debug, Default)]
pub struct Watermark {
    last: AtomicI64,
}

impl Watermark {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an explicit value instead of zero.
    pub fn starting_at(update_id: i64) -> Self {
        Self {
            last: AtomicI64::new(update_id),
        }
    }

    pub fn get(&self) -> i64 {
        self.last.load(Ordering::Acquire)
    }

    /// Rejects `update_id` if it is lower than the stored value; otherwise stores it.
    /// Equal ids are accepted. Returns the previous watermark on success.
    pub fn advance(&self, update_id: i64) -> Result<i64> {
        self.last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (update_id >= current).then_some(update_id)
            })
            .map_err(|watermark| WebhookError::StaleUpdate {
                update_id,
                watermark,
            })
    }
}
