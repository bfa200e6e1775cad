use super::{append, file_len};
use crate::aggregate::AggregateState;
use crate::tail::{ReadMode, ReadOutcome, TailError, collect_from, read_from};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn reads_whole_file_from_start() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(
        &path,
        "[info] started\nFlags: [am_used am_avail]\nFlags: [NONE]\n[info] idle\n",
    );
    let mut state = AggregateState::default();

    // Act
    let outcome = read_from(&path, 0, ReadMode::ToEof, &mut state).unwrap();

    // Assert
    assert_eq!(
        outcome,
        ReadOutcome {
            offset: file_len(&path),
            matched: 2,
        }
    );
    assert_eq!(state.total_lines_processed(), 2);
}

#[test]
fn reading_at_end_of_file_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(&path, "Flags: [db_hit_image]\n");
    let len = file_len(&path);
    let mut state = AggregateState::default();
    read_from(&path, 0, ReadMode::ToEof, &mut state).unwrap();

    let outcome = read_from(&path, len, ReadMode::ToEof, &mut state).unwrap();

    assert_eq!(outcome, ReadOutcome { offset: len, matched: 0 });
    assert_eq!(state.total_lines_processed(), 1);
    assert_eq!(state.cache().hits, 1);
}

#[test]
fn resuming_from_returned_offset_never_recounts() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    let mut state = AggregateState::default();
    let mut offset = 0;

    // Act
    for batch in 0..5 {
        append(&path, &format!("Flags: [spotify_used]\nline {batch}\n"));
        let outcome = read_from(&path, offset, ReadMode::CompleteLines, &mut state).unwrap();
        assert_eq!(outcome.matched, 1);
        offset = outcome.offset;
    }

    // Assert
    assert_eq!(state.source("sp").unwrap().used, 5);
    assert_eq!(offset, file_len(&path));
}

#[test]
fn complete_lines_mode_leaves_unterminated_tail() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(&path, "Flags: [am_used]\nFlags: [lfm_us");
    let mut state = AggregateState::default();

    // Act
    let first = read_from(&path, 0, ReadMode::CompleteLines, &mut state).unwrap();
    append(&path, "ed lfm_avail]\n");
    let second = read_from(&path, first.offset, ReadMode::CompleteLines, &mut state).unwrap();

    // Assert
    assert_eq!(first.offset, "Flags: [am_used]\n".len() as u64);
    assert_eq!(first.matched, 1);
    assert_eq!(second.matched, 1);
    assert_eq!(second.offset, file_len(&path));
    assert_eq!(state.source("lfm").unwrap().available, 1);
}

#[test]
fn to_eof_mode_counts_unterminated_last_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("old.log");
    append(&path, "Flags: [am_used]\nFlags: [imgur_used]");
    let mut state = AggregateState::default();

    let outcome = read_from(&path, 0, ReadMode::ToEof, &mut state).unwrap();

    assert_eq!(outcome.matched, 2);
    assert_eq!(outcome.offset, file_len(&path));
}

#[test]
fn offset_is_in_bytes_despite_invalid_utf8() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    let mut bytes = b"Now playing: \xe3\x81\x82 \xff\xfe\n".to_vec();
    bytes.extend_from_slice(b"Flags: [cache_written]\n");
    fs::write(&path, &bytes).unwrap();
    let mut state = AggregateState::default();

    // Act
    let outcome = read_from(&path, 0, ReadMode::CompleteLines, &mut state).unwrap();

    // Assert
    assert_eq!(outcome.offset, bytes.len() as u64);
    assert_eq!(state.cache().written, 1);
}

#[test]
fn truncated_file_is_read_from_start() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(&path, "Flags: [am_used]\nFlags: [am_used]\nFlags: [am_used]\n");
    let mut state = AggregateState::default();
    let stale = read_from(&path, 0, ReadMode::CompleteLines, &mut state).unwrap();
    fs::write(&path, "Flags: [lfm_used]\n").unwrap();

    // Act
    let outcome = read_from(&path, stale.offset, ReadMode::CompleteLines, &mut state).unwrap();

    // Assert
    assert_eq!(outcome.matched, 1);
    assert_eq!(outcome.offset, file_len(&path));
    assert_eq!(state.source("lfm").unwrap().used, 1);
}

#[test]
fn missing_file_is_an_error_and_leaves_state_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.log");
    let mut state = AggregateState::default();

    let result = read_from(&path, 0, ReadMode::ToEof, &mut state);

    assert!(matches!(result, Err(TailError::Open { .. })));
    assert_eq!(state.total_lines_processed(), 0);
}

#[test]
fn crlf_line_endings_are_handled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(&path, "Flags: [am_used am_avail]\r\nFlags: [NONE]\r\n");
    let mut state = AggregateState::default();

    let outcome = read_from(&path, 0, ReadMode::CompleteLines, &mut state).unwrap();

    assert_eq!(outcome.matched, 2);
    assert_eq!(state.reliability("am"), Some(1.0));
}

#[test]
fn collected_lines_are_counted_only_when_applied() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("musicpp.log");
    append(&path, "Flags: [sp_used sp_avail]\nFlags: [sp_used]\n");
    let mut state = AggregateState::default();

    // Act
    let pending = collect_from(&path, 0, ReadMode::ToEof).unwrap();
    let before = state.total_lines_processed();
    let outcome = pending.apply(&mut state);

    // Assert
    assert_eq!(before, 0);
    assert_eq!(outcome.matched, 2);
    assert_eq!(outcome.offset, file_len(&path));
    assert_eq!(state.total_lines_processed(), 2);
}
