use integration_tests::harness::LogDir;
use integration_tests::harness::log_dir::artwork_line;
use musicpp_stats_core::tail::{Rotation, TailState};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn appended_lines_are_counted_exactly_once() {
    // Arrange
    let logs = LogDir::new();
    logs.append("musicpp.log", &artwork_line("am_used"), 10);
    let mut session = logs.session();
    session.seed().unwrap();

    // Act
    let mut matched = 0;
    for i in 0..10 {
        logs.append("musicpp.log", &artwork_line("am_used am_avail"), 10 + i);
        matched += session.tick().unwrap().matched;
        matched += session.tick().unwrap().matched;
    }

    // Assert
    assert_eq!(matched, 10);
    let am = session.state().source("am").unwrap();
    assert_eq!(am.used, 11);
    assert_eq!(am.available, 10);
    assert_eq!(am.unavailable, 1);
}

#[test]
fn rotation_switches_to_newer_file_from_its_start() {
    // Arrange
    let logs = LogDir::new();
    let first = logs.append("musicpp_1.log", &artwork_line("lfm_used"), 10);
    let mut session = logs.session();
    session.seed().unwrap();

    // Act
    logs.append("musicpp_1.log", &artwork_line("lfm_used lfm_avail"), 11);
    let before_rotation = session.tick().unwrap();
    let second = logs.append(
        "musicpp_2.log",
        &format!("{}{}", artwork_line("db_hit_image"), artwork_line("NONE")),
        20,
    );
    let after_rotation = session.tick().unwrap();
    let steady = session.tick().unwrap();

    // Assert
    assert_eq!(before_rotation.matched, 1);
    assert_eq!(
        after_rotation.rotation,
        Some(Rotation::Rotated {
            previous: TailState::new(first.clone(), fs::metadata(&first).unwrap().len()),
        })
    );
    assert_eq!(after_rotation.matched, 2);
    assert_eq!(steady.rotation, Some(Rotation::Unchanged));
    assert_eq!(steady.matched, 0);
    assert_eq!(
        session.tail(),
        Some(&TailState::new(second.clone(), fs::metadata(&second).unwrap().len()))
    );
    assert_eq!(session.state().total_lines_processed(), 4);
}

#[test]
fn lines_written_to_old_file_just_before_rotation_are_kept() {
    // Arrange
    let logs = LogDir::new();
    logs.append("musicpp_1.log", &artwork_line("spotify_used"), 10);
    let mut session = logs.session();
    session.seed().unwrap();

    // Act
    logs.append("musicpp_1.log", &artwork_line("spotify_used sp_avail"), 11);
    logs.append("musicpp_2.log", &artwork_line("spotify_used sp_avail"), 20);
    let report = session.tick().unwrap();

    // Assert
    assert_eq!(report.matched, 2);
    let sp = session.state().source("sp").unwrap();
    assert_eq!(sp.used, 3);
    assert_eq!(sp.available, 2);
}

#[test]
fn returning_to_an_older_file_reads_it_again() {
    // Arrange
    let logs = LogDir::new();
    logs.append("a.log", &artwork_line("imgur_used"), 10);
    logs.append("b.log", &artwork_line("cache_written"), 20);
    let mut session = logs.session();
    session.seed().unwrap();

    // Act
    logs.touch("a.log", 30);
    let report = session.tick().unwrap();

    // Assert
    assert_eq!(report.file, Some(logs.file("a.log")));
    assert_eq!(report.matched, 1);
    assert_eq!(session.state().source("imgur").unwrap().used, 2);
}

#[test]
fn truncated_current_file_restarts_from_zero() {
    let logs = LogDir::new();
    logs.append(
        "musicpp.log",
        &format!("{}{}", artwork_line("am_used"), artwork_line("am_used")),
        10,
    );
    let mut session = logs.session();
    session.seed().unwrap();

    logs.truncate("musicpp.log", &artwork_line("am_used am_avail"), 11);
    let report = session.tick().unwrap();

    assert_eq!(report.matched, 1);
    assert_eq!(session.state().source("am").unwrap().used, 3);
}
