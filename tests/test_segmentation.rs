mod common;

use common::date;
use league_analytics::analytics::segmentation::{
    DEFAULT_GAP_DAYS, SeasonSegment, find_segment, segment_dates,
};

#[test]
fn test_no_dates_no_segments() {
    assert!(segment_dates(Vec::new(), DEFAULT_GAP_DAYS).is_empty());
}

#[test]
fn test_single_date_is_one_segment() {
    let segments = segment_dates(vec![date("2023-08-12")], DEFAULT_GAP_DAYS);
    assert_eq!(
        segments,
        vec![SeasonSegment {
            segment_id: 1,
            start_date: date("2023-08-12"),
            end_date: date("2023-08-12"),
        }]
    );
}

#[test]
fn test_gap_equal_to_threshold_stays_in_segment() {
    // 19 May to 17 Aug is exactly 90 days, 18 Aug is 91.
    let joined = segment_dates(vec![date("2024-05-19"), date("2024-08-17")], 90);
    assert_eq!(joined.len(), 1);

    let split = segment_dates(vec![date("2024-05-19"), date("2024-08-18")], 90);
    assert_eq!(split.len(), 2);
    assert_eq!(split[1].start_date, date("2024-08-18"));
    assert_eq!(split[1].segment_id, 2);
}

#[test]
fn test_unsorted_input_is_segmented_in_date_order() {
    let dates = vec![
        date("2024-01-21"),
        date("2024-01-05"),
        date("2024-01-20"),
        date("2024-01-01"),
        date("2024-01-12"),
    ];

    let segments = segment_dates(dates, 7);

    assert_eq!(
        segments,
        vec![
            SeasonSegment {
                segment_id: 1,
                start_date: date("2024-01-01"),
                end_date: date("2024-01-12"),
            },
            SeasonSegment {
                segment_id: 2,
                start_date: date("2024-01-20"),
                end_date: date("2024-01-21"),
            },
        ]
    );
}

#[test]
fn test_zero_gap_groups_same_day_only() {
    let dates = vec![
        date("2024-03-02"),
        date("2024-03-02"),
        date("2024-03-03"),
    ];
    let segments = segment_dates(dates, 0);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].end_date, date("2024-03-02"));
}

#[test]
fn test_segments_cover_dates_without_splitting_close_matches() {
    let gap = 30;
    let mut dates = vec![
        date("2022-08-06"),
        date("2022-09-01"),
        date("2022-09-30"),
        date("2023-05-28"),
        date("2023-06-10"),
        date("2023-08-11"),
        date("2023-08-12"),
        date("2023-09-10"),
    ];
    let segments = segment_dates(dates.clone(), gap);
    dates.sort();

    // Every date lands in exactly one segment, in order.
    let mut flattened = Vec::new();
    for segment in &segments {
        flattened.extend(dates.iter().copied().filter(|d| segment.contains(*d)));
    }
    assert_eq!(flattened, dates);

    // Boundaries only fall on gaps wider than the threshold.
    for pair in segments.windows(2) {
        assert!((pair[1].start_date - pair[0].end_date).num_days() > gap);
    }
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() <= gap {
            let a = find_segment(&segments, pair[0]).map(|s| s.segment_id);
            let b = find_segment(&segments, pair[1]).map(|s| s.segment_id);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_find_segment() {
    let segments = segment_dates(
        vec![
            date("2023-08-12"),
            date("2023-12-26"),
            date("2024-03-01"),
            date("2024-08-17"),
        ],
        150,
    );
    assert_eq!(segments.len(), 2);

    assert_eq!(
        find_segment(&segments, date("2023-10-01")).map(|s| s.segment_id),
        Some(1)
    );
    assert_eq!(
        find_segment(&segments, date("2024-08-17")).map(|s| s.segment_id),
        Some(2)
    );
    assert!(find_segment(&segments, date("2024-06-01")).is_none());
    assert!(find_segment(&segments, date("2020-01-01")).is_none());
    assert!(find_segment(&segments, date("2030-01-01")).is_none());
}
