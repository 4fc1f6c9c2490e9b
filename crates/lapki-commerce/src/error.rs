//! Storefront error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Cart operations never produce these: unknown ids are ignored there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// City input was empty after trimming.
    #[error("City name is empty")]
    EmptyCity,

    /// The action targets a feature that is switched off.
    #[error("Feature disabled: {0}")]
    FeatureDisabled(&'static str),

    /// Explicit catalog lookup failed.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
