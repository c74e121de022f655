//! Synthetic alert generation.
//!
//! Draws alerts with uniformly random fields under the record invariants:
//!
//! - `created_at` = now - U(0..=365) days - U(0..=24) hours
//! - half of the alerts are resolved; a resolved alert is `Completed` and
//!   gets `resolved_at` = `created_at` + U(0..=168) hours plus a random
//!   conclusion
//! - an unresolved alert is `Open` or `In Analysis` at random
//! - the alert type is drawn from the assigned team's catalog
//!
//! The generator is generic over [`Rng`], so a seeded
//! [`StdRng`](rand::rngs::StdRng) yields the same dataset every time.
//! Identifiers come from the same RNG.

use alertgen_types::{
    Alert, AlertId, AlertStatus, AlertType, Conclusion, ImpactLevel, Resolution, Team,
};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

use crate::store::AlertStore;

/// Number of alerts in the reference dataset.
pub const DEFAULT_ALERT_COUNT: usize = 200;

/// Upper bound (inclusive) of the day component of an alert's age.
pub const MAX_AGE_DAYS: i64 = 365;

/// Upper bound (inclusive) of the hour component of an alert's age.
pub const MAX_AGE_EXTRA_HOURS: i64 = 24;

/// Upper bound (inclusive) of the time an alert takes to resolve, in hours.
pub const MAX_RESOLUTION_HOURS: i64 = 168;

/// Generate `count` alerts relative to the current time.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> AlertStore {
    generate_with_clock(count, Utc::now(), rng)
}

/// Generate `count` alerts relative to `now`.
///
/// `now` is truncated to whole seconds so every timestamp survives the
/// second-precision wire format unchanged. The returned store holds exactly
/// `count` distinct IDs.
pub fn generate_with_clock<R: Rng + ?Sized>(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AlertStore {
    let now = now.trunc_subsecs(0);
    let mut store = AlertStore::with_capacity(count);

    while store.len() < count {
        let alert = random_alert(now, rng);
        let id = alert.id;
        if !store.insert(alert) {
            warn!(%id, "Generated duplicate alert ID, drawing again");
        }
    }

    let resolved = store.iter().filter(|a| a.is_resolved()).count();
    info!(
        count = store.len(),
        resolved,
        open = count.saturating_sub(resolved),
        "Alert dataset generated"
    );

    store
}

/// Draw a single alert relative to `now`.
pub fn random_alert<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Alert {
    let id = AlertId::from_random_bytes(rng.random());

    let age = TimeDelta::days(rng.random_range(0..=MAX_AGE_DAYS))
        .checked_add(&TimeDelta::hours(rng.random_range(0..=MAX_AGE_EXTRA_HOURS)))
        .unwrap_or_default();
    let created_at = now.checked_sub_signed(age).unwrap_or(now);

    let assigned_to = pick(rng, &Team::ALL, Team::Monitoring);
    let alert_type = pick(
        rng,
        assigned_to.alert_types(),
        primary_alert_type(assigned_to),
    );
    let impact_level = pick(rng, &ImpactLevel::ALL, ImpactLevel::Low);

    let resolved = rng.random_bool(0.5);
    let (status, resolution) = if resolved {
        let took = TimeDelta::hours(rng.random_range(0..=MAX_RESOLUTION_HOURS));
        let resolution = Resolution {
            resolved_at: created_at.checked_add_signed(took).unwrap_or(created_at),
            conclusion: pick(rng, &Conclusion::ALL, Conclusion::Positive),
        };
        (AlertStatus::Completed, Some(resolution))
    } else {
        (pick(rng, &AlertStatus::UNRESOLVED, AlertStatus::Open), None)
    };

    Alert {
        id,
        created_at,
        alert_type,
        impact_level,
        status,
        assigned_to,
        resolution,
    }
}

/// Uniform choice from a constant table. `fallback` only covers an empty
/// table, which none of the catalogs are.
fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T], fallback: T) -> T {
    items.choose(rng).copied().unwrap_or(fallback)
}

/// First alert type in a team's catalog.
const fn primary_alert_type(team: Team) -> AlertType {
    match team {
        Team::Monitoring => AlertType::SuspiciousFinancialTransaction,
        Team::It => AlertType::BackupNotExecuted,
        Team::Finance => AlertType::FinancialReportWithError,
        Team::Compliance => AlertType::ConflictOfInterest,
        Team::Logistics => AlertType::LateDelivery,
    }
}
