//! Alert entity and its flat wire form.
//!
//! [`Alert`] is the in-memory representation: resolution data lives in an
//! explicit [`Option<Resolution>`] so an open alert can never carry half a
//! resolution. [`AlertRecord`] is the eight-column shape written to JSON
//! and CSV; `Alert` serializes through it and deserializes by validating
//! it.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AlertStatus, AlertType, Conclusion, ImpactLevel, Team};
use crate::error::RecordError;
use crate::ids::AlertId;

/// Column names of the flat record, in export order.
pub const COLUMNS: [&str; 8] = [
    "alert_id",
    "creation_datetime",
    "type_of_alert",
    "impact_level",
    "status",
    "assigned_to",
    "resolutation_datetime",
    "conclusion",
];

// ---------------------------------------------------------------------------
// Alert
// ---------------------------------------------------------------------------

/// Outcome of a completed alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// When the analysis finished.
    pub resolved_at: DateTime<Utc>,
    /// What the analysis concluded.
    pub conclusion: Conclusion,
}

/// A single compliance/monitoring alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AlertRecord", try_from = "AlertRecord")]
pub struct Alert {
    /// Unique identifier.
    pub id: AlertId,
    /// When the alert was raised.
    pub created_at: DateTime<Utc>,
    /// Kind of alert; always one of `assigned_to`'s types.
    pub alert_type: AlertType,
    /// Impact on the organization.
    pub impact_level: ImpactLevel,
    /// Workflow status; `Completed` exactly when `resolution` is set.
    pub status: AlertStatus,
    /// Owning team.
    pub assigned_to: Team,
    /// Present once the alert is completed.
    pub resolution: Option<Resolution>,
}

impl Alert {
    /// Whether the alert has been resolved.
    pub const fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Time from creation to resolution, if resolved.
    pub fn time_to_resolution(&self) -> Option<TimeDelta> {
        self.resolution
            .map(|r| r.resolved_at.signed_duration_since(self.created_at))
    }

    /// Check the record invariants.
    ///
    /// - status is `Completed` iff a resolution is present
    /// - the alert type belongs to the assigned team
    /// - resolution is not earlier than creation
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.status.is_resolved() != self.is_resolved() {
            return Err(RecordError::StatusMismatch {
                id: self.id,
                status: self.status,
                resolved: self.is_resolved(),
            });
        }
        if self.alert_type.team() != self.assigned_to {
            return Err(RecordError::TypeOutsideTeam {
                id: self.id,
                alert_type: self.alert_type,
                team: self.assigned_to,
            });
        }
        if let Some(resolution) = self.resolution
            && resolution.resolved_at < self.created_at
        {
            return Err(RecordError::ResolvedBeforeCreated { id: self.id });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Flat record
// ---------------------------------------------------------------------------

/// Flat eight-field alert as exchanged over HTTP and written to CSV.
///
/// Field order matches [`COLUMNS`]. Absent resolution fields are `null`
/// in JSON and empty in CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Unique identifier.
    pub alert_id: AlertId,
    /// Creation timestamp.
    #[serde(with = "crate::timestamp")]
    pub creation_datetime: DateTime<Utc>,
    /// Alert type label.
    pub type_of_alert: AlertType,
    /// Impact level label.
    pub impact_level: ImpactLevel,
    /// Status label.
    pub status: AlertStatus,
    /// Team label.
    pub assigned_to: Team,
    /// Resolution timestamp, when resolved.
    #[serde(with = "crate::timestamp::option")]
    pub resolutation_datetime: Option<DateTime<Utc>>,
    /// Conclusion label, when resolved.
    pub conclusion: Option<Conclusion>,
}

impl From<Alert> for AlertRecord {
    fn from(alert: Alert) -> Self {
        Self {
            alert_id: alert.id,
            creation_datetime: alert.created_at,
            type_of_alert: alert.alert_type,
            impact_level: alert.impact_level,
            status: alert.status,
            assigned_to: alert.assigned_to,
            resolutation_datetime: alert.resolution.map(|r| r.resolved_at),
            conclusion: alert.resolution.map(|r| r.conclusion),
        }
    }
}

impl TryFrom<AlertRecord> for Alert {
    type Error = RecordError;

    fn try_from(record: AlertRecord) -> Result<Self, Self::Error> {
        let resolution = match (record.resolutation_datetime, record.conclusion) {
            (Some(resolved_at), Some(conclusion)) => Some(Resolution {
                resolved_at,
                conclusion,
            }),
            (None, None) => None,
            _ => {
                return Err(RecordError::PartialResolution {
                    id: record.alert_id,
                });
            }
        };

        let alert = Self {
            id: record.alert_id,
            created_at: record.creation_datetime,
            alert_type: record.type_of_alert,
            impact_level: record.impact_level,
            status: record.status,
            assigned_to: record.assigned_to,
            resolution,
        };
        alert.validate()?;
        Ok(alert)
    }
}
