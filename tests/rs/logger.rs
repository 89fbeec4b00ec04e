//! Integration tests for logger behavior.

use course_planner::logger::{set_level, set_level_from_str, Level};
use course_planner::{debug, error, info, verbose, warn};

#[test]
fn test_level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("INFO"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn test_level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn test_logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration {}", 1);
}
