//! Series invariants: ascending unique dates, later-insertion-wins merge.

use jiff::civil::date;

use okumetra_core::models::axial::AxialRecord;
use okumetra_core::models::series::{Measured, Series};

fn axial(y: i16, m: i8, d: i8, od_mm: f64) -> AxialRecord {
    AxialRecord::new(date(y, m, d), od_mm, od_mm, Vec::new())
}

/// Re-ingesting a date replaces the earlier record with the later one.
#[test]
fn merge_keeps_later_record_on_date_collision() {
    let mut series = Series::new();
    assert!(series.is_empty());
    series.merge(vec![axial(2025, 1, 1, 23.10)]);
    series.merge(vec![axial(2025, 1, 1, 23.42)]);

    assert_eq!(series.len(), 1);
    assert_eq!(series.records()[0].od_mm, 23.42);
}

/// Duplicate dates within a single batch also resolve to the later entry.
#[test]
fn merge_resolves_duplicates_within_a_batch() {
    let series = Series::from_records(vec![
        axial(2025, 1, 1, 23.10),
        axial(2025, 1, 1, 23.42),
    ]);

    assert_eq!(series.len(), 1);
    assert_eq!(series.records()[0].od_mm, 23.42);
}

/// Batches arriving out of order still produce an ascending series.
#[test]
fn merge_sorts_out_of_order_batches() {
    let mut series = Series::new();
    series.merge(vec![axial(2024, 6, 1, 23.0), axial(2023, 1, 15, 22.4)]);
    series.merge(vec![axial(2023, 9, 1, 22.7)]);

    let dates = series.dates();
    assert_eq!(
        dates,
        vec![date(2023, 1, 15), date(2023, 9, 1), date(2024, 6, 1)],
    );
}

/// Merging then re-extracting preserves record count and strict ordering.
#[test]
fn round_trip_preserves_count_and_ordering() {
    let mut series = Series::new();
    series.merge(vec![
        axial(2022, 3, 1, 22.0),
        axial(2023, 3, 1, 22.5),
        axial(2024, 3, 1, 23.0),
    ]);
    series.merge(vec![axial(2023, 3, 1, 22.6), axial(2025, 3, 1, 23.4)]);

    assert_eq!(series.len(), 4);
    let dates = series.dates();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(series.last().map(Measured::date), Some(date(2025, 3, 1)));
}

/// Column projection stays parallel to the date vector.
#[test]
fn values_project_parallel_to_dates() {
    let series = Series::from_records(vec![
        AxialRecord::new(date(2023, 1, 1), 22.4, 22.6, Vec::new()),
        AxialRecord::new(date(2024, 1, 1), 23.0, 23.2, Vec::new()),
    ]);
    assert_eq!(series.values(|r| r.od_mm), vec![22.4, 23.0]);
    assert_eq!(series.values(|r| r.os_mm), vec![22.6, 23.2]);
}
