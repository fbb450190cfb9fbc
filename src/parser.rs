//! The URI reference parser.

use crate::encoding::table::{self, Table};
use crate::encoding::{decode_element, PctDecoder};
use crate::error::{ParseError, ParseErrorKind};
use crate::ip;
use crate::Uri;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use memchr::{memchr, memchr2, memchr3};

macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// Splits the input into its components and decodes each in place.
pub(crate) fn parse(input: &str) -> Result<Uri, ParseError> {
    let s = input.as_bytes();
    let mut uri = Uri::default();
    let mut pos = 0;

    // A scheme is present iff a colon occurs before the first
    // slash, question mark, or number sign.
    let head_end = memchr3(b'/', b'?', b'#', s).unwrap_or(s.len());
    if let Some(i) = memchr(b':', &s[..head_end]) {
        uri.scheme = Some(parse_scheme(&s[..i])?);
        pos = i + 1;
    }

    let mut had_authority = false;
    if s[pos..].starts_with(b"//") {
        had_authority = true;
        pos += 2;
        let end = pos + memchr3(b'/', b'?', b'#', &s[pos..]).unwrap_or(s.len() - pos);
        parse_authority(&mut uri, &s[pos..end], pos)?;
        pos = end;
    }

    let path_end = pos + memchr2(b'?', b'#', &s[pos..]).unwrap_or(s.len() - pos);
    uri.path = parse_path(&s[pos..path_end], pos)?;
    pos = path_end;

    // "//example.com" and "//example.com/" denote the same resource.
    if had_authority && uri.path.is_empty() {
        uri.path = vec![Vec::new()];
    }

    if s.get(pos) == Some(&b'?') {
        let end = pos + 1 + memchr(b'#', &s[pos + 1..]).unwrap_or(s.len() - pos - 1);
        uri.query = Some(decode_element(&s[pos + 1..end], table::QUERY, pos + 1)?);
        pos = end;
    }

    if s.get(pos) == Some(&b'#') {
        uri.fragment = Some(decode_element(&s[pos + 1..], table::FRAGMENT, pos + 1)?);
    }

    Ok(uri)
}

/// Validates a scheme and returns it lowercased.
///
/// Error indexes are relative to the start of the scheme.
pub(crate) fn parse_scheme(s: &[u8]) -> Result<String, ParseError> {
    match s {
        [first, rest @ ..] if table::ALPHA.allows(*first) => {
            if let Some(i) = position_not_allowed(rest, table::SCHEME) {
                err!(i + 1, UnexpectedChar);
            }
        }
        _ => err!(0, UnexpectedChar),
    }
    let mut scheme = String::with_capacity(s.len());
    for &x in s {
        scheme.push(x.to_ascii_lowercase() as char);
    }
    Ok(scheme)
}

fn position_not_allowed(s: &[u8], table: &Table) -> Option<usize> {
    s.iter().position(|&x| !table.allows(x))
}

fn parse_path(raw: &[u8], offset: usize) -> Result<Vec<Vec<u8>>, ParseError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    if raw == b"/" {
        return Ok(vec![Vec::new()]);
    }
    let mut segments = Vec::new();
    let mut start = 0;
    loop {
        let end = match memchr(b'/', &raw[start..]) {
            Some(i) => start + i,
            None => raw.len(),
        };
        segments.push(decode_element(&raw[start..end], table::PCHAR, offset + start)?);
        if end == raw.len() {
            break;
        }
        start = end + 1;
    }
    Ok(segments)
}

enum HostState {
    FirstChar,
    RegName,
    PctEscape,
    IpLiteralOpen,
    Ipv6Body,
    IpvFutureVersion,
    IpvFutureBody,
    AfterIpLiteralClose,
    Port,
}

/// Parses `userinfo "@" host ":" port` into `uri`.
///
/// The userinfo, if any, ends at the first `@`. The host is decoded
/// and, for registered names, lowercased; IP literals are stored
/// without their brackets and with case preserved.
fn parse_authority(uri: &mut Uri, auth: &[u8], offset: usize) -> Result<(), ParseError> {
    use HostState::*;

    let (host_start, hostport) = match memchr(b'@', auth) {
        Some(i) => {
            uri.userinfo = Some(decode_element(&auth[..i], table::USERINFO, offset)?);
            (offset + i + 1, &auth[i + 1..])
        }
        None => (offset, auth),
    };

    let mut state = FirstChar;
    let mut host: Vec<u8> = Vec::new();
    let mut is_reg_name = true;
    let mut dec = PctDecoder::new();
    let mut escape_start = 0;
    let mut bracket = 0;
    let mut version_digits = 0;
    let mut body_len = 0;
    let mut colon = 0;

    let mut i = 0;
    while i < hostport.len() {
        let x = hostport[i];
        match state {
            FirstChar | RegName => {
                if x == b':' {
                    colon = i;
                    state = Port;
                    break;
                } else if x == b'%' {
                    escape_start = i;
                    dec = PctDecoder::new();
                    state = PctEscape;
                } else if x == b'[' && matches!(state, FirstChar) {
                    is_reg_name = false;
                    bracket = i;
                    state = IpLiteralOpen;
                } else if table::REG_NAME.allows(x) {
                    host.push(x);
                    state = RegName;
                } else {
                    err!(host_start + i, UnexpectedChar);
                }
            }
            PctEscape => {
                if !dec.feed(x) {
                    err!(host_start + escape_start, InvalidOctet);
                }
                if dec.is_done() {
                    host.push(dec.byte());
                    state = RegName;
                }
            }
            IpLiteralOpen => {
                if x == b'v' || x == b'V' {
                    host.push(x);
                    state = IpvFutureVersion;
                } else {
                    state = Ipv6Body;
                    continue;
                }
            }
            Ipv6Body => {
                if x == b']' {
                    if !ip::validate_ipv6(&host) {
                        err!(host_start + bracket, InvalidIpLiteral);
                    }
                    state = AfterIpLiteralClose;
                } else {
                    host.push(x);
                }
            }
            IpvFutureVersion => {
                if x == b'.' {
                    if version_digits == 0 {
                        err!(host_start + bracket, InvalidIpLiteral);
                    }
                    host.push(x);
                    state = IpvFutureBody;
                } else if table::HEXDIG.allows(x) {
                    host.push(x);
                    version_digits += 1;
                } else {
                    err!(host_start + bracket, InvalidIpLiteral);
                }
            }
            IpvFutureBody => {
                if x == b']' {
                    if body_len == 0 {
                        err!(host_start + bracket, InvalidIpLiteral);
                    }
                    state = AfterIpLiteralClose;
                } else if table::IPV_FUTURE.allows(x) {
                    host.push(x);
                    body_len += 1;
                } else {
                    err!(host_start + bracket, InvalidIpLiteral);
                }
            }
            AfterIpLiteralClose => {
                if x == b':' {
                    colon = i;
                    state = Port;
                    break;
                }
                err!(host_start + i, UnexpectedChar);
            }
            Port => unreachable!(),
        }
        i += 1;
    }

    match state {
        FirstChar | RegName | AfterIpLiteralClose => {}
        Port => uri.port = Some(parse_port(&hostport[colon + 1..], host_start + colon)?),
        PctEscape => err!(host_start + escape_start, InvalidOctet),
        IpLiteralOpen | Ipv6Body | IpvFutureVersion | IpvFutureBody => {
            err!(host_start + bracket, InvalidIpLiteral)
        }
    }

    if is_reg_name {
        host.make_ascii_lowercase();
    }
    uri.host = host;
    Ok(())
}

/// Parses a port, rejecting empty, non-numeric, and out-of-range values.
///
/// `colon` is the index of the delimiter, reported on error.
fn parse_port(digits: &[u8], colon: usize) -> Result<u16, ParseError> {
    if digits.is_empty() {
        err!(colon, InvalidPort);
    }
    let mut value: u32 = 0;
    for &x in digits {
        if !x.is_ascii_digit() {
            err!(colon, InvalidPort);
        }
        value = value * 10 + u32::from(x - b'0');
        if value > u32::from(u16::MAX) {
            err!(colon, InvalidPort);
        }
    }
    Ok(value as u16)
}
