//! The capability object handed to oracles.
//!
//! An `InvocationContext` carries everything an oracle body may touch:
//! a snapshot of the record collection, lookup and enumeration over
//! it, the similarity primitives and a failure constructor. There is
//! no mutation surface and no ambient state; each invocation gets its
//! own context.

use crate::similarity::{self, Span};
use crate::view::RecordView;
use vectord_types::{InvokeError, Record};

/// Read-only capabilities for a single oracle invocation.
pub struct InvocationContext {
    records: Vec<Record>,
}

impl InvocationContext {
    /// Build a context over an explicit snapshot.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve an identifier to a record view.
    pub fn find(&self, id: u64) -> Option<RecordView<'_>> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(RecordView::new)
    }

    /// Every record in the snapshot, in the store's insertion order.
    pub fn records(&self) -> Vec<RecordView<'_>> {
        self.records.iter().map(RecordView::new).collect()
    }

    /// Every record except the given one. This is the supported way to
    /// iterate "all other records"; oracles should not re-implement
    /// the self-exclusion check.
    pub fn records_excluding(&self, reference: &RecordView<'_>) -> Vec<RecordView<'_>> {
        self.records
            .iter()
            .filter(|r| r.id != reference.id())
            .map(RecordView::new)
            .collect()
    }

    /// Dot product of two records over an optional component range.
    pub fn dot(
        &self,
        a: &RecordView<'_>,
        b: &RecordView<'_>,
        span: Option<Span>,
    ) -> Result<f64, InvokeError> {
        similarity::dot(a, b, span)
    }

    /// Cosine similarity of two records over an optional range.
    pub fn cosine(
        &self,
        a: &RecordView<'_>,
        b: &RecordView<'_>,
        span: Option<Span>,
    ) -> Result<f64, InvokeError> {
        similarity::cosine(a, b, span)
    }

    /// Jaccard similarity of two records over an optional range.
    pub fn jaccard(
        &self,
        a: &RecordView<'_>,
        b: &RecordView<'_>,
        span: Option<Span>,
    ) -> Result<f64, InvokeError> {
        similarity::jaccard(a, b, span)
    }

    /// Construct an oracle-signalled failure, to be returned as the
    /// invocation result.
    pub fn fail(&self, message: impl Into<String>) -> InvokeError {
        InvokeError::Failed(message.into())
    }
}
