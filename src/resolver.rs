//! Reference resolution.

use crate::normalizer::remove_dot_segments;
use crate::Uri;
use alloc::vec::Vec;

/// Resolves `reference` against the base URI `base`.
///
/// Implements the transformation of RFC 3986 section 5.2.2. The
/// target's path always comes out with dot segments removed.
pub(crate) fn resolve(base: &Uri, reference: &Uri) -> Uri {
    let mut target = Uri::default();

    if reference.scheme.is_some() {
        target.scheme = reference.scheme.clone();
        copy_authority(&mut target, reference);
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else if reference.has_authority() {
        target.scheme = base.scheme.clone();
        copy_authority(&mut target, reference);
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else {
        target.scheme = base.scheme.clone();
        copy_authority(&mut target, base);
        if reference.path.is_empty() {
            target.path = base.path.clone();
            target.query = if reference.query.is_some() {
                reference.query.clone()
            } else {
                base.query.clone()
            };
        } else if reference.path[0].is_empty() {
            target.path = remove_dot_segments(&reference.path);
            target.query = reference.query.clone();
        } else {
            target.path = remove_dot_segments(&merge_paths(base, &reference.path));
            target.query = reference.query.clone();
        }
    }
    target.fragment = reference.fragment.clone();
    target
}

fn copy_authority(target: &mut Uri, from: &Uri) {
    target.userinfo = from.userinfo.clone();
    target.host = from.host.clone();
    target.port = from.port;
}

/// Merges a relative-path reference with the base path.
///
/// The base path loses its last segment first, except that the lone
/// root segment of a base with an authority is kept.
fn merge_paths(base: &Uri, reference_path: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut merged = base.path.clone();
    if !(base.has_authority() && merged.len() == 1) {
        merged.pop();
    }
    merged.extend(reference_path.iter().cloned());
    merged
}
