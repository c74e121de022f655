//! Row/column view of the alert collection for in-process analysis.
//!
//! [`Table::from_alerts`] flattens each alert into one row with one typed
//! cell per field, using the same column names and order as the CSV
//! export. The table is a pure value; nothing else in the pipeline reads
//! it back.

use std::collections::BTreeMap;
use std::fmt;

use alertgen_types::{Alert, AlertId, COLUMNS};
use chrono::{DateTime, Utc};

/// Kind of data held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Alert identifiers.
    Id,
    /// Timestamps.
    Timestamp,
    /// Labels from a fixed enumeration.
    Category,
}

/// A named, typed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name, as in the CSV header.
    pub name: &'static str,
    /// Kind of the column's cells.
    pub kind: ColumnKind,
}

/// A single typed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An alert identifier.
    Id(AlertId),
    /// A timestamp.
    Timestamp(DateTime<Utc>),
    /// An enumeration label.
    Category(&'static str),
    /// No value (unresolved alerts).
    Missing,
}

impl Cell {
    /// Whether the cell holds no value.
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Timestamp(ts) => f.write_str(&alertgen_types::timestamp::format(ts)),
            Self::Category(label) => f.write_str(label),
            Self::Missing => Ok(()),
        }
    }
}

const KINDS: [ColumnKind; 8] = [
    ColumnKind::Id,
    ColumnKind::Timestamp,
    ColumnKind::Category,
    ColumnKind::Category,
    ColumnKind::Category,
    ColumnKind::Category,
    ColumnKind::Timestamp,
    ColumnKind::Category,
];

/// Alerts flattened into rows of typed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Flatten alerts into a table, one row per alert in iteration order.
    pub fn from_alerts<'a, I>(alerts: I) -> Self
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        let columns = COLUMNS
            .iter()
            .zip(KINDS)
            .map(|(&name, kind)| Column { name, kind })
            .collect();
        let rows = alerts.into_iter().map(row_of).collect();
        Self { columns, rows }
    }

    /// Column definitions in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// All cells of a named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<Cell>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).copied().unwrap_or(Cell::Missing))
                .collect(),
        )
    }

    /// A table holding the first `n` rows.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Frequency of each value in a column, skipping missing cells.
    pub fn value_counts(&self, name: &str) -> Option<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for cell in self.column(name)? {
            if !cell.is_missing() {
                let slot = counts.entry(cell.to_string()).or_insert(0_usize);
                *slot = slot.saturating_add(1);
            }
        }
        Some(counts)
    }
}

fn row_of(alert: &Alert) -> Vec<Cell> {
    vec![
        Cell::Id(alert.id),
        Cell::Timestamp(alert.created_at),
        Cell::Category(alert.alert_type.label()),
        Cell::Category(alert.impact_level.label()),
        Cell::Category(alert.status.label()),
        Cell::Category(alert.assigned_to.label()),
        alert
            .resolution
            .map_or(Cell::Missing, |r| Cell::Timestamp(r.resolved_at)),
        alert
            .resolution
            .map_or(Cell::Missing, |r| Cell::Category(r.conclusion.label())),
    ]
}

/// Renders a left-aligned text grid with a header rule. Missing cells print
/// as `-`.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_missing() {
                            String::from("-")
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rendered
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(col.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        write_line(f, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_line(f, &rule, &widths)?;
        for row in &rendered {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize],
) -> fmt::Result {
    let mut first = true;
    for (cell, &width) in cells.iter().zip(widths) {
        if !first {
            f.write_str("  ")?;
        }
        first = false;
        write!(f, "{:<width$}", cell.as_ref())?;
    }
    writeln!(f)
}
