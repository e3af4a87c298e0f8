//! Batch and list endpoints over any [`Resource`].
//!
//! A batch never fails as a whole. Each element is parsed, resolved, and
//! rendered on its own; any failure or absence becomes `null` in that
//! element's slot, and output order always matches input order.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::QueryError;
use crate::resource::{Catalog, Resource};

/// Parse, resolve, and render pipeline for one resource type.
#[derive(Debug, Clone)]
pub struct BatchPipeline<R> {
    resource: R,
    max_batch_size: usize,
}

impl<R: Resource> BatchPipeline<R> {
    /// Create a pipeline that processes at most `max_batch_size` elements
    /// per batch.
    pub const fn new(resource: R, max_batch_size: usize) -> Self {
        Self {
            resource,
            max_batch_size,
        }
    }

    /// The resource this pipeline serves.
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Largest batch processed before the tail is dropped.
    pub const fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Run a batch.
    ///
    /// Returns one value per retained element: `min(batch.len(), cap)`
    /// values, each either the rendered object or `null`.
    pub fn run(&self, batch: &[Value]) -> Vec<Value> {
        if batch.len() > self.max_batch_size {
            debug!(
                resource = R::NAME,
                requested = batch.len(),
                cap = self.max_batch_size,
                "Batch truncated"
            );
        }

        batch
            .iter()
            .take(self.max_batch_size)
            .enumerate()
            .map(|(index, raw)| match self.lookup(raw) {
                Ok(Some(value)) => value,
                Ok(None) => Value::Null,
                Err(e) => {
                    debug!(resource = R::NAME, index, error = %e, "Batch element failed");
                    Value::Null
                }
            })
            .collect()
    }

    /// Look up one raw element, surfacing failures to the caller.
    pub fn lookup(&self, raw: &Value) -> Result<Option<Value>, QueryError> {
        let key = self.resource.parse(raw)?;
        self.lookup_key(&key)
    }

    /// Look up an already-validated key.
    pub fn lookup_key(&self, key: &R::Key) -> Result<Option<Value>, QueryError> {
        self.resource
            .resolve(key)?
            .map(|object| serde_json::to_value(self.resource.render(&object)))
            .transpose()
            .map_err(QueryError::from)
    }
}

/// Renders every object of a resource type.
#[derive(Debug, Clone)]
pub struct ListEndpoint<R> {
    resource: R,
}

impl<R: Catalog> ListEndpoint<R> {
    /// Create a list endpoint.
    pub const fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Render every object, using the same renderer as batch lookups.
    pub fn run(&self) -> Vec<Value> {
        self.resource
            .all()
            .iter()
            .map(|object| {
                serde_json::to_value(self.resource.render(object)).unwrap_or_else(|e| {
                    warn!(resource = R::NAME, error = %e, "List element failed to serialize");
                    Value::Null
                })
            })
            .collect()
    }
}
