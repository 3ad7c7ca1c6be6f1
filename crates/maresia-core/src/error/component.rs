//! Errors raised while a component binds itself to the page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while constructing or driving a page component.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ComponentError {
    /// Part of a feature's markup is present but a required sibling is not
    #[error("{component}: required element {selector} not found")]
    MissingElement {
        /// Component being constructed
        component: String,
        /// Selector that matched nothing
        selector: String,
    },

    /// A browser API call threw
    #[error("{component}: {operation} failed: {message}")]
    Dom {
        /// Component issuing the call
        component: String,
        /// Name of the failing operation
        operation: String,
        /// Stringified JS exception
        message: String,
    },

    /// Index outside the collection the component manages
    #[error("{component}: index {index} out of range for {len} items")]
    OutOfRange {
        /// Component owning the collection
        component: String,
        /// Requested index
        index: usize,
        /// Collection length
        len: usize,
    },
}

impl ComponentError {
    pub fn missing(component: &str, selector: &str) -> Self {
        Self::MissingElement { component: component.to_string(), selector: selector.to_string() }
    }

    pub fn dom(component: &str, operation: &str, message: impl Into<String>) -> Self {
        Self::Dom {
            component: component.to_string(),
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}
