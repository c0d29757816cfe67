//! Latest-value resolution for ward collection rates.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::db::rows::CollectionRateRow;

/// Pick the current collection-rate row per ward: the row with the
/// lexicographically greatest period key among that ward's rows.
///
/// Period keys are zero-padded, so string comparison orders them
/// chronologically. Rows with an absent period key never become current.
/// When two rows share a period key, the one with the higher
/// `collection_id` wins, making the result independent of input order.
pub fn latest_rate_per_ward(rows: &[CollectionRateRow]) -> HashMap<i64, CollectionRateRow> {
    let mut latest: HashMap<i64, &CollectionRateRow> = HashMap::new();

    for row in rows {
        let Some(period) = row.year_month.as_deref() else {
            continue;
        };

        match latest.entry(row.ward_id) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                let current = slot.get();
                let current_period = current.year_month.as_deref().unwrap_or("");
                if (period, row.collection_id) > (current_period, current.collection_id) {
                    slot.insert(row);
                }
            }
        }
    }

    latest
        .into_iter()
        .map(|(ward_id, row)| (ward_id, row.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(collection_id: i64, ward_id: i64, year_month: Option<&str>, rate: f32) -> CollectionRateRow {
        CollectionRateRow {
            collection_id,
            ward_id,
            year_month: year_month.map(str::to_string),
            rate,
        }
    }

    #[test]
    fn test_picks_maximum_period() {
        let rows = vec![
            rate(1, 10, Some("2024-01"), 50.0),
            rate(2, 10, Some("2024-03"), 75.0),
            rate(3, 10, Some("2023-12"), 90.0),
        ];
        let latest = latest_rate_per_ward(&rows);
        assert_eq!(latest[&10].year_month.as_deref(), Some("2024-03"));
        assert_eq!(latest[&10].collection_id, 2);
    }

    #[test]
    fn test_ward_without_rows_is_absent() {
        let rows = vec![rate(1, 10, Some("2024-01"), 50.0)];
        let latest = latest_rate_per_ward(&rows);
        assert!(!latest.contains_key(&11));
    }

    #[test]
    fn test_absent_period_key_never_wins() {
        let rows = vec![
            rate(1, 10, None, 99.0),
            rate(2, 10, Some("2020-01"), 40.0),
        ];
        let latest = latest_rate_per_ward(&rows);
        assert_eq!(latest[&10].collection_id, 2);

        // A ward with only period-less rows has no current value at all.
        let only_null = vec![rate(3, 11, None, 10.0)];
        assert!(latest_rate_per_ward(&only_null).is_empty());
    }

    #[test]
    fn test_equal_periods_break_by_collection_id() {
        let rows = vec![
            rate(5, 10, Some("2024-06"), 60.0),
            rate(9, 10, Some("2024-06"), 70.0),
            rate(7, 10, Some("2024-06"), 65.0),
        ];
        let latest = latest_rate_per_ward(&rows);
        assert_eq!(latest[&10].collection_id, 9);

        // Same rows, reversed arrival order: identical result.
        let mut reversed = rows.clone();
        reversed.reverse();
        assert_eq!(latest_rate_per_ward(&reversed)[&10].collection_id, 9);
    }

    #[test]
    fn test_independent_wards_resolve_independently() {
        let rows = vec![
            rate(1, 10, Some("2024-01"), 10.0),
            rate(2, 11, Some("2023-01"), 20.0),
            rate(3, 10, Some("2024-02"), 30.0),
        ];
        let latest = latest_rate_per_ward(&rows);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[&10].collection_id, 3);
        assert_eq!(latest[&11].collection_id, 2);
    }
}
