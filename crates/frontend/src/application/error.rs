//! Service layer error types
//!
//! `CatalogError` is what the table's add/update/delete handlers return. It
//! wraps transport errors and adds the application-level failures: a
//! `success: false` reply, or a row the synchronizer cannot address.

use moviedesk_shared::MutationKind;
use thiserror::Error;

use crate::ports::outbound::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport or parse failure talking to the backend
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered with `success: false`
    #[error("{}", .0.failure_message())]
    Rejected(MutationKind),

    /// The table reported a row index past the end of the loaded list
    #[error("Row {index} is out of range ({len} movies loaded)")]
    RowOutOfRange { index: usize, len: usize },

    /// The row was appended locally and never received a server id
    #[error("Movie at row {index} has no server-assigned id")]
    MissingId { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_match_mutation() {
        assert_eq!(
            CatalogError::Rejected(MutationKind::Create).to_string(),
            "Error adding movie"
        );
        assert_eq!(
            CatalogError::Rejected(MutationKind::Delete).to_string(),
            "Error deleting movie"
        );
    }

    #[test]
    fn api_errors_display_transparently() {
        let err = CatalogError::from(ApiError::RequestFailed("connection refused".into()));
        assert_eq!(err.to_string(), "Request failed: connection refused");
        assert!(matches!(err, CatalogError::Api(_)));
    }
}
