//! Path normalization.

use alloc::vec::Vec;

/// Applies the *remove_dot_segments* routine of RFC 3986 to a list of
/// decoded segments.
///
/// A `..` never climbs above a leading root segment, and a trailing
/// `.` or `..` leaves the result at directory level (ending in an
/// empty segment) when anything remains.
pub(crate) fn remove_dot_segments(path: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = Vec::with_capacity(path.len());
    let mut at_directory_level = false;

    for segment in path {
        match segment.as_slice() {
            b"." => at_directory_level = true,
            b".." => {
                if let Some(last) = out.last() {
                    if !last.is_empty() || out.len() > 1 {
                        out.pop();
                    }
                }
                at_directory_level = true;
            }
            _ => {
                if !at_directory_level || !segment.is_empty() {
                    out.push(segment.clone());
                }
                at_directory_level = segment.is_empty();
            }
        }
    }

    if at_directory_level && out.last().is_some_and(|last| !last.is_empty()) {
        out.push(Vec::new());
    }
    out
}
