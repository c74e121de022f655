//! Enumeration types for alert records.
//!
//! Every enumeration serializes to its display label (`"In Analysis"`,
//! `"False Positive"`, `"IT"`), which is also the text written to the CSV
//! export. Each type exposes an `ALL` table in declaration order that the
//! generator draws from.

use serde::{Deserialize, Serialize};

/// Implements [`core::fmt::Display`] in terms of the type's `label()`.
macro_rules! display_via_label {
    ($($name:ident),+ $(,)?) => {
        $(
            impl core::fmt::Display for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// Impact level
// ---------------------------------------------------------------------------

/// Impact of an alert on the organization or team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    /// Minor impact.
    Low,
    /// Moderate impact.
    Medium,
    /// Significant impact.
    High,
    /// Severe impact requiring immediate attention.
    Critical,
}

impl ImpactLevel {
    /// All impact levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Workflow status of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Raised, nobody has started on it.
    Open,
    /// Under analysis by the assigned team.
    #[serde(rename = "In Analysis")]
    InAnalysis,
    /// Analysis finished; the alert carries a resolution.
    Completed,
}

impl AlertStatus {
    /// All statuses in workflow order.
    pub const ALL: [Self; 3] = [Self::Open, Self::InAnalysis, Self::Completed];

    /// Statuses an unresolved alert may have.
    pub const UNRESOLVED: [Self; 2] = [Self::Open, Self::InAnalysis];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InAnalysis => "In Analysis",
            Self::Completed => "Completed",
        }
    }

    /// Whether this status implies a resolution.
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Completed)
    }
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

/// Team an alert is assigned to. The team fixes which alert types are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Transaction and access monitoring.
    Monitoring,
    /// Information technology.
    #[serde(rename = "IT")]
    It,
    /// Finance and accounting.
    Finance,
    /// Compliance and ethics.
    Compliance,
    /// Logistics and inventory.
    Logistics,
}

impl Team {
    /// All teams.
    pub const ALL: [Self; 5] = [
        Self::Monitoring,
        Self::It,
        Self::Finance,
        Self::Compliance,
        Self::Logistics,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monitoring => "Monitoring",
            Self::It => "IT",
            Self::Finance => "Finance",
            Self::Compliance => "Compliance",
            Self::Logistics => "Logistics",
        }
    }

    /// The alert types this team handles. Never empty.
    pub const fn alert_types(self) -> &'static [AlertType] {
        match self {
            Self::Monitoring => &[
                AlertType::SuspiciousFinancialTransaction,
                AlertType::SuspiciousLogin,
            ],
            Self::It => &[
                AlertType::BackupNotExecuted,
                AlertType::IncompleteSystemRecord,
                AlertType::PendingSystemUpdate,
            ],
            Self::Finance => &[
                AlertType::FinancialReportWithError,
                AlertType::IncompleteTaxCompliance,
                AlertType::PaymentToUnapprovedSupplier,
            ],
            Self::Compliance => &[
                AlertType::ConflictOfInterest,
                AlertType::CodeOfConductViolation,
            ],
            Self::Logistics => &[
                AlertType::LateDelivery,
                AlertType::ProductWithoutTracking,
                AlertType::InventoryControlFailure,
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Alert type
// ---------------------------------------------------------------------------

/// Kind of alert. Each type belongs to exactly one [`Team`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertType {
    /// Monitoring.
    #[serde(rename = "Suspicious financial transaction")]
    SuspiciousFinancialTransaction,
    /// Monitoring.
    #[serde(rename = "Suspicious login")]
    SuspiciousLogin,
    /// IT.
    #[serde(rename = "Backup not executed")]
    BackupNotExecuted,
    /// IT.
    #[serde(rename = "Incomplete system record")]
    IncompleteSystemRecord,
    /// IT.
    #[serde(rename = "Pending system update")]
    PendingSystemUpdate,
    /// Finance.
    #[serde(rename = "Financial report with error")]
    FinancialReportWithError,
    /// Finance.
    #[serde(rename = "Incomplete tax compliance")]
    IncompleteTaxCompliance,
    /// Finance.
    #[serde(rename = "Payment to unapproved supplier")]
    PaymentToUnapprovedSupplier,
    /// Compliance.
    #[serde(rename = "Conflict of interest")]
    ConflictOfInterest,
    /// Compliance.
    #[serde(rename = "Code of conduct violation")]
    CodeOfConductViolation,
    /// Logistics.
    #[serde(rename = "Late delivery")]
    LateDelivery,
    /// Logistics.
    #[serde(rename = "Product without tracking")]
    ProductWithoutTracking,
    /// Logistics.
    #[serde(rename = "Inventory control failure")]
    InventoryControlFailure,
}

impl AlertType {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuspiciousFinancialTransaction => "Suspicious financial transaction",
            Self::SuspiciousLogin => "Suspicious login",
            Self::BackupNotExecuted => "Backup not executed",
            Self::IncompleteSystemRecord => "Incomplete system record",
            Self::PendingSystemUpdate => "Pending system update",
            Self::FinancialReportWithError => "Financial report with error",
            Self::IncompleteTaxCompliance => "Incomplete tax compliance",
            Self::PaymentToUnapprovedSupplier => "Payment to unapproved supplier",
            Self::ConflictOfInterest => "Conflict of interest",
            Self::CodeOfConductViolation => "Code of conduct violation",
            Self::LateDelivery => "Late delivery",
            Self::ProductWithoutTracking => "Product without tracking",
            Self::InventoryControlFailure => "Inventory control failure",
        }
    }

    /// The team that owns this alert type.
    pub const fn team(self) -> Team {
        match self {
            Self::SuspiciousFinancialTransaction | Self::SuspiciousLogin => Team::Monitoring,
            Self::BackupNotExecuted | Self::IncompleteSystemRecord | Self::PendingSystemUpdate => {
                Team::It
            }
            Self::FinancialReportWithError
            | Self::IncompleteTaxCompliance
            | Self::PaymentToUnapprovedSupplier => Team::Finance,
            Self::ConflictOfInterest | Self::CodeOfConductViolation => Team::Compliance,
            Self::LateDelivery | Self::ProductWithoutTracking | Self::InventoryControlFailure => {
                Team::Logistics
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Conclusion
// ---------------------------------------------------------------------------

/// Outcome recorded when an alert's analysis is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conclusion {
    /// The alert reflected a real issue.
    Positive,
    /// The alert fired without a real issue behind it.
    #[serde(rename = "False Positive")]
    FalsePositive,
    /// Inconclusive; keep watching.
    #[serde(rename = "Needs Monitoring")]
    NeedsMonitoring,
}

impl Conclusion {
    /// All conclusions.
    pub const ALL: [Self; 3] = [Self::Positive, Self::FalsePositive, Self::NeedsMonitoring];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::FalsePositive => "False Positive",
            Self::NeedsMonitoring => "Needs Monitoring",
        }
    }
}

display_via_label!(ImpactLevel, AlertStatus, Team, AlertType, Conclusion);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_team_owns_its_types() {
        for team in Team::ALL {
            assert!(!team.alert_types().is_empty());
            for alert_type in team.alert_types() {
                assert_eq!(alert_type.team(), team, "{alert_type} leaked out of {team}");
            }
        }
    }

    #[test]
    fn catalog_has_thirteen_types() {
        let total: usize = Team::ALL.iter().map(|t| t.alert_types().len()).sum();
        assert_eq!(total, 13);
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&AlertStatus::InAnalysis).unwrap_or_default();
        assert_eq!(json, "\"In Analysis\"");
        let json = serde_json::to_string(&Team::It).unwrap_or_default();
        assert_eq!(json, "\"IT\"");
        let json = serde_json::to_string(&Conclusion::FalsePositive).unwrap_or_default();
        assert_eq!(json, "\"False Positive\"");
    }

    #[test]
    fn serde_labels_match_display() {
        for alert_type in Team::ALL.iter().flat_map(|t| t.alert_types()) {
            let json = serde_json::to_string(alert_type).unwrap_or_default();
            assert_eq!(json, format!("\"{alert_type}\""));
        }
        for level in ImpactLevel::ALL {
            let json = serde_json::to_string(&level).unwrap_or_default();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn only_completed_is_resolved() {
        assert!(AlertStatus::Completed.is_resolved());
        assert!(AlertStatus::UNRESOLVED.iter().all(|s| !s.is_resolved()));
    }

    #[test]
    fn labels_parse_back() {
        let parsed: Result<Conclusion, _> = serde_json::from_str("\"Needs Monitoring\"");
        assert_eq!(parsed.ok(), Some(Conclusion::NeedsMonitoring));
    }
}
