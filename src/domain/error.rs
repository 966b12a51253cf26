//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent values that cannot form a valid model.
///
/// Derivations over the region tree never fail; missing data propagates as `None`.
/// These errors only arise when decoding raw values into domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid region level: {0} (expected 1=world, 2=country, 3=province)")]
    InvalidLevel(u8),
}
