//! In-memory alert store.
//!
//! [`AlertStore`] keeps alerts in insertion order alongside a hash index on
//! [`AlertId`]. It is filled once by the generator and then only read:
//! there is no update or delete. The engine wraps it in an `Arc` and shares
//! it with the query API without any locking.

use std::collections::HashMap;

use alertgen_types::{Alert, AlertId};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered map from [`AlertId`] to [`Alert`].
#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    /// Alerts in insertion order.
    alerts: Vec<Alert>,
    /// Position of each alert in `alerts`.
    index: HashMap<AlertId, usize>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` alerts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            alerts: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an alert.
    ///
    /// Returns `false` and leaves the store untouched if an alert with the
    /// same ID is already present.
    pub fn insert(&mut self, alert: Alert) -> bool {
        if self.index.contains_key(&alert.id) {
            return false;
        }
        self.index.insert(alert.id, self.alerts.len());
        self.alerts.push(alert);
        true
    }

    /// Look up an alert by ID.
    pub fn get(&self, id: &AlertId) -> Option<&Alert> {
        self.index.get(id).and_then(|&pos| self.alerts.get(pos))
    }

    /// Whether an alert with this ID exists.
    pub fn contains(&self, id: &AlertId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of stored alerts.
    pub const fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the store holds no alerts.
    pub const fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Iterate over alerts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }

    /// All alerts in insertion order.
    pub fn as_slice(&self) -> &[Alert] {
        &self.alerts
    }
}

impl<'a> IntoIterator for &'a AlertStore {
    type Item = &'a Alert;
    type IntoIter = std::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Alert> for AlertStore {
    /// Later duplicates of an ID are dropped.
    fn from_iter<I: IntoIterator<Item = Alert>>(iter: I) -> Self {
        let mut store = Self::new();
        for alert in iter {
            store.insert(alert);
        }
        store
    }
}

/// Serializes as an object keyed by alert ID, in insertion order.
impl Serialize for AlertStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.alerts.len()))?;
        for alert in &self.alerts {
            map.serialize_entry(&alert.id, alert)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alertgen_types::{AlertStatus, AlertType, ImpactLevel, Team};
    use chrono::Utc;

    use super::*;

    fn alert() -> Alert {
        Alert {
            id: AlertId::new(),
            created_at: Utc::now(),
            alert_type: AlertType::LateDelivery,
            impact_level: ImpactLevel::Medium,
            status: AlertStatus::InAnalysis,
            assigned_to: Team::Logistics,
            resolution: None,
        }
    }

    #[test]
    fn insert_and_get() {
        let mut store = AlertStore::new();
        let a = alert();
        let id = a.id;
        assert!(store.insert(a.clone()));
        assert_eq!(store.get(&id), Some(&a));
        assert!(store.contains(&id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_id_is_refused() {
        let mut store = AlertStore::new();
        let a = alert();
        assert!(store.insert(a.clone()));
        let mut dup = alert();
        dup.id = a.id;
        assert!(!store.insert(dup));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&a.id), Some(&a));
    }

    #[test]
    fn unknown_id_is_none() {
        let store: AlertStore = (0..3).map(|_| alert()).collect();
        assert_eq!(store.len(), 3);
        assert!(store.get(&AlertId::new()).is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let alerts: Vec<Alert> = (0..5).map(|_| alert()).collect();
        let store: AlertStore = alerts.iter().cloned().collect();
        let ids: Vec<AlertId> = store.iter().map(|a| a.id).collect();
        let expected: Vec<AlertId> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn serializes_as_keyed_object_in_order() {
        let store: AlertStore = (0..4).map(|_| alert()).collect();
        let json = serde_json::to_string(&store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for a in &store {
            let entry = object.get(&a.id.to_string()).unwrap();
            assert_eq!(entry["alert_id"], a.id.to_string());
        }
        let positions: Vec<usize> = store
            .iter()
            .map(|a| json.find(&a.id.to_string()).unwrap())
            .collect();
        assert!(positions.is_sorted_by(|a, b| a < b));
    }

    #[test]
    fn empty_store_is_empty_object() {
        let store = AlertStore::new();
        assert!(store.is_empty());
        assert_eq!(serde_json::to_string(&store).unwrap(), "{}");
    }
}
