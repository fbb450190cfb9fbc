#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URI reference parser and resolver that strictly adheres to
//! IETF [RFC 3986], storing every component in decoded form.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! Percent-encoded octets are decoded while parsing, so the accessors
//! of [`Uri`] hand out the component *values* rather than raw slices
//! of the input. Writing a `Uri` back out with [`Display`] re-applies
//! the default percent-encoding of each component and always produces
//! a valid URI reference.
//!
//! [`Display`]: core::fmt::Display
//!
//! # Examples
//!
//! ```
//! use uri_parts::Uri;
//!
//! let uri = Uri::parse("http://user@example.com:8080/a/%62?q#frag")?;
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.userinfo(), Some(&b"user"[..]));
//! assert_eq!(uri.host(), b"example.com");
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.path_to_string(), Ok("/a/b".into()));
//! assert_eq!(uri.query(), Some(&b"q"[..]));
//! assert_eq!(uri.fragment(), Some(&b"frag"[..]));
//! # Ok::<_, uri_parts::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Implements [`Error`] for [`ParseError`].
//!   Disable it for `no_std` targets; the crate still requires `alloc`.
//!
//! - `serde`: Serializes a [`Uri`] as its textual form and
//!   deserializes by parsing.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

pub mod encoding;

mod error;
mod fmt;
mod ip;
mod normalizer;
mod parser;
mod resolver;

pub use error::{ParseError, ParseErrorKind};

use alloc::string::{FromUtf8Error, String};
use alloc::vec::Vec;
use core::str::FromStr;

/// A [URI reference] defined in RFC 3986, held as decoded components.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// Two `Uri`s compare equal when their components are equal, so
/// references that differ only in percent-encoding or in the case of
/// the scheme and host are equal:
///
/// ```
/// use uri_parts::Uri;
///
/// assert_eq!(Uri::parse("HTTP://EXAMPLE.com/%7Ea")?, Uri::parse("http://example.com/~a")?);
/// # Ok::<_, uri_parts::ParseError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<Vec<u8>>,
    pub(crate) host: Vec<u8>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Vec<Vec<u8>>,
    pub(crate) query: Option<Vec<u8>>,
    pub(crate) fragment: Option<Vec<u8>>,
}

impl Uri {
    /// Parses a URI reference, decoding its components.
    ///
    /// The empty string parses as an empty relative reference. Schemes
    /// and registered names come out lowercased; IP literals keep
    /// their case and lose their brackets.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the byte index and the kind
    /// of the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("foo://example.com:8042/over/there?name=ferret#nose")?;
    /// assert_eq!(uri.scheme(), Some("foo"));
    /// assert_eq!(uri.port(), Some(8042));
    /// # Ok::<_, uri_parts::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Uri, ParseError> {
        parser::parse(input)
    }

    /// Returns the scheme, if present, in lowercase.
    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the decoded userinfo subcomponent.
    ///
    /// `Some` with empty bytes means the input carried an `@` sign
    /// with nothing before it, which is distinct from no userinfo.
    #[inline]
    pub fn userinfo(&self) -> Option<&[u8]> {
        self.userinfo.as_deref()
    }

    /// Returns the userinfo as a string, if it is valid UTF-8.
    pub fn userinfo_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.userinfo
            .as_ref()
            .map(|bytes| String::from_utf8(bytes.clone()))
            .transpose()
    }

    /// Returns the decoded host subcomponent, empty when absent.
    ///
    /// Registered names are lowercased; IPv6 and IPvFuture literals
    /// are stored without their enclosing brackets.
    #[inline]
    pub fn host(&self) -> &[u8] {
        &self.host
    }

    /// Returns the host as a string, if it is valid UTF-8.
    pub fn host_to_string(&self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.host.clone())
    }

    /// Returns the port, if present.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the decoded path segments.
    ///
    /// An empty slice is an empty path. A leading empty segment marks
    /// an absolute path, and a path of one empty segment is `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("/path/to//dir/")?;
    /// let segments: Vec<&[u8]> = uri.path().iter().map(|s| s.as_slice()).collect();
    /// assert_eq!(segments, [&b""[..], b"path", b"to", b"", b"dir", b""]);
    /// # Ok::<_, uri_parts::ParseError>(())
    /// ```
    #[inline]
    pub fn path(&self) -> &[Vec<u8>] {
        &self.path
    }

    /// Joins the path segments back together, if they are valid UTF-8.
    ///
    /// The joined form contains the decoded segment values and no
    /// percent-encoding.
    pub fn path_to_string(&self) -> Result<String, FromUtf8Error> {
        if self.path.len() == 1 && self.path[0].is_empty() {
            return Ok(String::from("/"));
        }
        let mut bytes = Vec::new();
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                bytes.push(b'/');
            }
            bytes.extend_from_slice(segment);
        }
        String::from_utf8(bytes)
    }

    /// Returns the decoded query, if present.
    #[inline]
    pub fn query(&self) -> Option<&[u8]> {
        self.query.as_deref()
    }

    /// Returns the query as a string, if it is valid UTF-8.
    pub fn query_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.query
            .as_ref()
            .map(|bytes| String::from_utf8(bytes.clone()))
            .transpose()
    }

    /// Returns the decoded fragment, if present.
    #[inline]
    pub fn fragment(&self) -> Option<&[u8]> {
        self.fragment.as_deref()
    }

    /// Returns the fragment as a string, if it is valid UTF-8.
    pub fn fragment_to_string(&self) -> Result<Option<String>, FromUtf8Error> {
        self.fragment
            .as_ref()
            .map(|bytes| String::from_utf8(bytes.clone()))
            .transpose()
    }

    /// Returns `true` if a query is present, even an empty one.
    #[inline]
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Returns `true` if a fragment is present, even an empty one.
    #[inline]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Returns `true` if any authority subcomponent is present.
    #[inline]
    pub fn has_authority(&self) -> bool {
        !self.host.is_empty() || self.userinfo.is_some() || self.port.is_some()
    }

    /// Returns `true` if the reference is [relative], i.e., without a scheme.
    ///
    /// [relative]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.2
    #[inline]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns `true` if the path neither is absolute nor belongs to
    /// an authority.
    #[inline]
    pub fn has_relative_path(&self) -> bool {
        !self.has_authority() && self.path.first().map_or(true, |first| !first.is_empty())
    }

    /// Sets or clears the scheme, validating and lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the given scheme is empty, does
    /// not start with a letter, or contains a character outside
    /// letters, digits, `+`, `-`, and `.`. The error index is
    /// relative to the given string.
    pub fn set_scheme<T: AsRef<str>>(&mut self, scheme: Option<T>) -> Result<(), ParseError> {
        self.scheme = match scheme {
            Some(s) => Some(parser::parse_scheme(s.as_ref().as_bytes())?),
            None => None,
        };
        Ok(())
    }

    /// Sets or clears the userinfo, given in decoded form.
    pub fn set_userinfo<T: Into<Vec<u8>>>(&mut self, userinfo: Option<T>) {
        self.userinfo = userinfo.map(Into::into);
    }

    /// Sets the host, given in decoded form; empty means absent.
    pub fn set_host<T: Into<Vec<u8>>>(&mut self, host: T) {
        self.host = host.into();
    }

    /// Sets or clears the port.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Sets the path segments, given in decoded form.
    pub fn set_path<T: Into<Vec<Vec<u8>>>>(&mut self, path: T) {
        self.path = path.into();
    }

    /// Sets or clears the query, given in decoded form.
    pub fn set_query<T: Into<Vec<u8>>>(&mut self, query: Option<T>) {
        self.query = query.map(Into::into);
    }

    /// Sets or clears the fragment, given in decoded form.
    pub fn set_fragment<T: Into<Vec<u8>>>(&mut self, fragment: Option<T>) {
        self.fragment = fragment.map(Into::into);
    }

    /// Removes dot segments from the path, as in [Section 5.2.4,
    /// RFC 3986][1].
    ///
    /// [1]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let mut uri = Uri::parse("/a/b/c/./../../g")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.to_string(), "/a/g");
    /// # Ok::<_, uri_parts::ParseError>(())
    /// ```
    pub fn normalize_path(&mut self) {
        self.path = normalizer::remove_dot_segments(&self.path);
    }

    /// Resolves a reference against this base URI, as in [Section
    /// 5.2.2, RFC 3986][1].
    ///
    /// [1]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2
    ///
    /// The target keeps the fragment of the reference, and its path
    /// comes out with dot segments removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// let reference = Uri::parse("../g")?;
    /// assert_eq!(base.resolve(&reference).to_string(), "http://a/b/g");
    /// # Ok::<_, uri_parts::ParseError>(())
    /// ```
    #[inline]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        resolver::resolve(self, reference)
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Uri, ParseError> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Uri, ParseError> {
        Uri::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Uri, ParseError> {
        Uri::parse(&s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Uri;
    use core::fmt;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Uri {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Uri {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Uri, D::Error> {
            struct UriVisitor;

            impl Visitor<'_> for UriVisitor {
                type Value = Uri;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a URI reference")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Uri, E> {
                    Uri::parse(v).map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_str(UriVisitor)
        }
    }
}
