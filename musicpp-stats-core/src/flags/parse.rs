use crate::flags::types::FlagSet;
use crate::flags::vocabulary::NONE_SENTINEL;

const MARKER: &str = "Flags:";

/// Parses the flag set carried by a log line.
///
/// Returns `None` when the line has no `Flags: [...]` field, which means the
/// line must not be counted at all. A field holding `NONE` yields an empty set.
pub fn parse_flags(line: &str) -> Option<FlagSet> {
    extract_flag_field(line).map(|field| {
        if field.trim() == NONE_SENTINEL {
            FlagSet::new()
        } else {
            field.split_whitespace().collect()
        }
    })
}

/// Returns the raw content between the brackets of the first complete
/// `Flags: [...]` field on the line.
///
/// Whitespace is allowed between the colon and the opening bracket. A
/// `Flags:` occurrence that is not followed by a closed bracket pair does not
/// hide a later, well-formed one.
pub fn extract_flag_field(line: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(pos) = line[search_from..].find(MARKER) {
        let after_marker = search_from + pos + MARKER.len();

        if let Some(body) = line[after_marker..].trim_start().strip_prefix('[') {
            if let Some(end) = body.find(']') {
                return Some(&body[..end]);
            }
        }

        search_from = after_marker;
    }

    None
}
