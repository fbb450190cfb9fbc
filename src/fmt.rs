//! [`Display`] and [`Debug`] implementations.
//!
//! [`Display`]: fmt::Display
//! [`Debug`]: fmt::Debug

use crate::encoding::{encode_into, table};
use crate::error::{ParseError, ParseErrorKind};
use crate::Uri;
use core::fmt::{self, Write};

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

/// Writes the URI reference out in valid, normalized textual form.
///
/// Each component is percent-encoded with its default set, hosts
/// containing a colon are bracketed and lowercased, and a query or
/// fragment that is present but empty still gets its delimiter.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }
        if self.has_authority() {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                encode_into(userinfo, table::USERINFO, f)?;
                f.write_char('@')?;
            }
            if self.host.contains(&b':') {
                f.write_char('[')?;
                for &x in &self.host {
                    f.write_char(x.to_ascii_lowercase() as char)?;
                }
                f.write_char(']')?;
            } else {
                encode_into(&self.host, table::REG_NAME, f)?;
            }
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        if self.path.len() == 1 && self.path[0].is_empty() {
            f.write_char('/')?;
        } else {
            for (i, segment) in self.path.iter().enumerate() {
                if i > 0 {
                    f.write_char('/')?;
                }
                encode_into(segment, table::PCHAR, f)?;
            }
        }
        if let Some(query) = &self.query {
            f.write_char('?')?;
            encode_into(query, table::QUERY_STRICT, f)?;
        }
        if let Some(fragment) = &self.fragment {
            f.write_char('#')?;
            encode_into(fragment, table::FRAGMENT, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uri").field(&format_args!("{self}")).finish()
    }
}
