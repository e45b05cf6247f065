//! Record CRUD handlers.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use vectord_store::RecordStore;
use vectord_types::{Record, RecordListResponse, RecordResponse};

/// Handler for record operations.
pub struct RecordsHandler {
    store: Arc<RecordStore>,
}

impl RecordsHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Store a new record. On success the message carries the
    /// assigned identifier.
    pub fn create(&self, record: Record) -> RecordResponse {
        match self.store.create(record) {
            Ok(id) => {
                debug!("created record {}", id);
                RecordResponse::with_message(id.to_string())
            }
            Err(e) => RecordResponse::failure(e.to_string()),
        }
    }

    /// Read a record by identifier.
    pub fn read(&self, id: u64) -> RecordResponse {
        match self.store.find(id) {
            Some(record) => RecordResponse::with_record(record),
            None => RecordResponse::failure(format!("record {} not found", id)),
        }
    }

    /// Update a record. Only the provided fields are replaced.
    pub fn update(
        &self,
        id: u64,
        data: Option<Vec<f32>>,
        meta: Option<HashMap<String, String>>,
    ) -> RecordResponse {
        match self.store.update(id, data, meta) {
            Ok(_) => RecordResponse::success(),
            Err(e) => RecordResponse::failure(e.to_string()),
        }
    }

    /// Delete a record by identifier.
    pub fn delete(&self, id: u64) -> RecordResponse {
        match self.store.delete(id) {
            Some(_) => RecordResponse::success(),
            None => RecordResponse::failure(format!("record {} not found", id)),
        }
    }

    /// One page of records, in insertion order.
    ///
    /// `page` is 1-based; `page` and `per_page` are clamped to at
    /// least 1. An out-of-range page yields an empty slice with the
    /// correct totals.
    pub fn list(&self, page: u64, per_page: u64) -> RecordListResponse {
        let all = self.store.records();
        let total = all.len() as u64;

        let page = page.max(1);
        let per_page = per_page.max(1);

        let mut pages = total / per_page;
        if total % per_page > 0 {
            pages += 1;
        }

        let start = (page - 1) * per_page;
        if total <= start {
            return RecordListResponse {
                total,
                pages,
                records: Vec::new(),
            };
        }

        let end = (start + per_page).min(total);
        RecordListResponse {
            total,
            pages,
            records: all[start as usize..end as usize].to_vec(),
        }
    }
}
