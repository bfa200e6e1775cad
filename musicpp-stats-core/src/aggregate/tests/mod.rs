
use crate::aggregate::AggregateState;
use crate::flags::parse_flags;

/// Folds every flag-bearing line, the way the tailer does.
pub(super) fn fold_lines(state: &mut AggregateState, lines: &[&str]) {
    for line in lines {
        if let Some(flags) = parse_flags(line) {
            state.fold(&flags);
        }
    }
}
