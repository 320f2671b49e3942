use league_analytics::{
    analytics::segmentation::DEFAULT_GAP_DAYS,
    config::{AppConfig, checked_gap_days},
};

#[test]
fn test_negative_gap_falls_back_to_default() {
    assert_eq!(checked_gap_days(-1), DEFAULT_GAP_DAYS);
    assert_eq!(checked_gap_days(0), 0);
    assert_eq!(checked_gap_days(30), 30);
}

#[test]
fn test_negative_gap_from_env() {
    // Only test in this binary that touches the environment.
    unsafe {
        std::env::set_var("SEASON_GAP_DAYS", "-5");
    }
    assert_eq!(AppConfig::from_env().season_gap_days, DEFAULT_GAP_DAYS);

    unsafe {
        std::env::set_var("SEASON_GAP_DAYS", "45");
    }
    assert_eq!(AppConfig::from_env().season_gap_days, 45);
}
