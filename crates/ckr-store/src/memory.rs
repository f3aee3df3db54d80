//! In-memory [`FeedbackStore`] backed by an ordered map.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ckr_domain::{FeedbackId, FeedbackRequest};
use parking_lot::RwLock;

use crate::criteria::{Slice, SliceCriteria};
use crate::error::StoreError;
use crate::store::FeedbackStore;

/// Thread-safe in-process store.
///
/// The `BTreeMap` keeps rows ordered by id, so a descending iterator from
/// the cursor is the whole pagination story. Ids come from a process-local
/// counter starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    rows: RwLock<BTreeMap<u64, FeedbackRequest>>,
    next_id: AtomicU64,
}

impl InMemoryFeedbackStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Number of rows ever saved
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether nothing has been saved yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn save(&self, mut request: FeedbackRequest) -> Result<FeedbackRequest, StoreError> {
        if let Some(id) = request.id() {
            return Err(StoreError::AlreadyPersisted(id));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        request
            .assign_id(FeedbackId::from(id))
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.rows.write().insert(id, request.clone());
        tracing::debug!(id, status = %request.status(), "feedback saved");
        Ok(request)
    }

    async fn find(&self, id: FeedbackId) -> Result<Option<FeedbackRequest>, StoreError> {
        Ok(self.rows.read().get(&id.value()).cloned())
    }

    async fn update(
        &self,
        request: &FeedbackRequest,
        base: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let id = request.id().ok_or(StoreError::MissingId)?;
        let mut rows = self.rows.write();
        let stored = rows.get_mut(&id.value()).ok_or(StoreError::NotFound(id))?;
        if stored.updated_at() != base {
            return Err(StoreError::StaleState { id });
        }
        *stored = request.clone();
        tracing::debug!(id = id.value(), status = %request.status(), "feedback updated");
        Ok(())
    }

    async fn slice(&self, criteria: &SliceCriteria) -> Result<Slice, StoreError> {
        let rows = self.rows.read();
        let upper = match criteria.cursor {
            Some(cursor) => Bound::Excluded(cursor.value()),
            None => Bound::Unbounded,
        };
        let size = criteria.effective_size();
        let mut items: Vec<FeedbackRequest> = rows
            .range((Bound::Unbounded, upper))
            .rev()
            .filter(|(_, row)| criteria.matches(row))
            .take(size + 1)
            .map(|(_, row)| row.clone())
            .collect();
        let has_more = items.len() > size;
        items.truncate(size);
        let next_cursor = if has_more {
            items.last().and_then(FeedbackRequest::id)
        } else {
            None
        };
        Ok(Slice {
            items,
            next_cursor,
            has_more,
        })
    }
}
