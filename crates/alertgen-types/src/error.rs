//! Error type for converting flat wire records into alerts.

use crate::enums::{AlertStatus, AlertType, Team};
use crate::ids::AlertId;

/// Reasons an [`AlertRecord`](crate::AlertRecord) is not a valid alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The status disagrees with whether resolution fields are present.
    #[error("alert {id}: status {status} but resolution fields present = {resolved}")]
    StatusMismatch {
        /// The offending alert.
        id: AlertId,
        /// Status carried by the record.
        status: AlertStatus,
        /// Whether resolution fields were present.
        resolved: bool,
    },

    /// Exactly one of the resolution timestamp and conclusion is present.
    #[error("alert {id}: resolution timestamp and conclusion must appear together")]
    PartialResolution {
        /// The offending alert.
        id: AlertId,
    },

    /// The alert type belongs to a different team than the assignee.
    #[error("alert {id}: type {alert_type} does not belong to team {team}")]
    TypeOutsideTeam {
        /// The offending alert.
        id: AlertId,
        /// The alert type carried by the record.
        alert_type: AlertType,
        /// The team the alert is assigned to.
        team: Team,
    },

    /// The resolution timestamp precedes the creation timestamp.
    #[error("alert {id}: resolved before it was created")]
    ResolvedBeforeCreated {
        /// The offending alert.
        id: AlertId,
    },
}
