//! Package catalog errors

use super::StevedoreError;

/// Creates a package not found error
pub fn not_found(name: impl Into<String>, version: Option<impl Into<String>>) -> StevedoreError {
    StevedoreError::PackageNotFound {
        name: name.into(),
        version: version.map(Into::into),
    }
}
