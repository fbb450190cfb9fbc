//! Validators for the address forms allowed inside an IP literal.

use crate::encoding::table::HEXDIG;

/// Checks a dotted-decimal IPv4 address.
///
/// Exactly four groups of decimal digits in `0..=255`. Leading zeros
/// are accepted, matching the looser reading many resolvers take.
pub(crate) fn validate_ipv4(s: &[u8]) -> bool {
    let mut groups = 0;
    for group in s.split(|&x| x == b'.') {
        groups += 1;
        if group.is_empty() || groups > 4 {
            return false;
        }
        let mut value: u32 = 0;
        for &x in group {
            if !x.is_ascii_digit() {
                return false;
            }
            value = value * 10 + u32::from(x - b'0');
            if value > 255 {
                return false;
            }
        }
    }
    groups == 4
}

enum State {
    NoGroupsYet,
    ColonButNoGroupsYet,
    AfterDoubleColon,
    InGroup,
    InGroupCouldBeIpv4,
    ColonAfterGroup,
}

/// Checks the inside of an IPv6 literal (the text between the brackets).
///
/// Groups hold at most four hexadecimal digits, `::` may appear at most
/// once, and a trailing dotted-decimal address counts as two groups.
/// With a `::` present at most seven groups may appear, otherwise
/// exactly eight must.
pub(crate) fn validate_ipv6(s: &[u8]) -> bool {
    use State::*;

    let mut state = NoGroupsYet;
    let mut groups = 0usize;
    let mut digits = 0usize;
    let mut double_colon = false;
    let mut ipv4_start = 0;
    let mut ipv4_tail = false;

    for (i, &x) in s.iter().enumerate() {
        match state {
            NoGroupsYet | AfterDoubleColon => {
                if x == b':' {
                    if matches!(state, AfterDoubleColon) {
                        return false;
                    }
                    state = ColonButNoGroupsYet;
                } else if x.is_ascii_digit() {
                    ipv4_start = i;
                    digits = 1;
                    state = InGroupCouldBeIpv4;
                } else if HEXDIG.allows(x) {
                    digits = 1;
                    state = InGroup;
                } else {
                    return false;
                }
            }
            ColonButNoGroupsYet => {
                if x != b':' {
                    return false;
                }
                double_colon = true;
                state = AfterDoubleColon;
            }
            InGroup => {
                if x == b':' {
                    digits = 0;
                    groups += 1;
                    state = ColonAfterGroup;
                } else if HEXDIG.allows(x) {
                    digits += 1;
                    if digits > 4 {
                        return false;
                    }
                } else {
                    return false;
                }
            }
            InGroupCouldBeIpv4 => {
                if x == b':' {
                    digits = 0;
                    groups += 1;
                    state = ColonAfterGroup;
                } else if x == b'.' {
                    ipv4_tail = true;
                    break;
                } else if HEXDIG.allows(x) {
                    digits += 1;
                    if digits > 4 {
                        return false;
                    }
                    if !x.is_ascii_digit() {
                        state = InGroup;
                    }
                } else {
                    return false;
                }
            }
            ColonAfterGroup => {
                if x == b':' {
                    if double_colon {
                        return false;
                    }
                    double_colon = true;
                    state = AfterDoubleColon;
                } else if x.is_ascii_digit() {
                    ipv4_start = i;
                    digits = 1;
                    state = InGroupCouldBeIpv4;
                } else if HEXDIG.allows(x) {
                    digits = 1;
                    state = InGroup;
                } else {
                    return false;
                }
            }
        }
    }

    if ipv4_tail {
        if !validate_ipv4(&s[ipv4_start..]) {
            return false;
        }
        groups += 2;
    } else {
        match state {
            InGroup | InGroupCouldBeIpv4 => groups += 1,
            AfterDoubleColon => {}
            NoGroupsYet | ColonButNoGroupsYet | ColonAfterGroup => return false,
        }
    }

    if double_colon {
        groups <= 7
    } else {
        groups == 8
    }
}
