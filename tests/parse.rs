use uri_parts::{ParseErrorKind::*, Uri};

fn segs(segments: &[&[u8]]) -> Vec<Vec<u8>> {
    segments.iter().map(|s| s.to_vec()).collect()
}

#[test]
fn parse_absolute() {
    let u = Uri::parse("ftp://ftp.is.co.za/rfc/rfc1808.txt").unwrap();
    assert_eq!(u.scheme(), Some("ftp"));
    assert_eq!(u.userinfo(), None);
    assert_eq!(u.host(), b"ftp.is.co.za");
    assert_eq!(u.port(), None);
    assert_eq!(u.path(), segs(&[b"", b"rfc", b"rfc1808.txt"]));
    assert_eq!(u.query(), None);
    assert_eq!(u.fragment(), None);

    let u = Uri::parse("http://user:pw@www.example.com:8080/abc/def?foobar#ch2").unwrap();
    assert_eq!(u.scheme(), Some("http"));
    assert_eq!(u.userinfo(), Some(&b"user:pw"[..]));
    assert_eq!(u.host(), b"www.example.com");
    assert_eq!(u.port(), Some(8080));
    assert_eq!(u.path(), segs(&[b"", b"abc", b"def"]));
    assert_eq!(u.query(), Some(&b"foobar"[..]));
    assert_eq!(u.fragment(), Some(&b"ch2"[..]));

    let u = Uri::parse("urn:example:animal:ferret:nose").unwrap();
    assert_eq!(u.scheme(), Some("urn"));
    assert!(!u.has_authority());
    assert_eq!(u.path(), segs(&[b"example:animal:ferret:nose"]));

    let u = Uri::parse("mailto:John.Doe@example.com").unwrap();
    assert_eq!(u.scheme(), Some("mailto"));
    assert_eq!(u.path(), segs(&[b"John.Doe@example.com"]));

    let u = Uri::parse("file:///etc/hosts").unwrap();
    assert_eq!(u.scheme(), Some("file"));
    assert!(u.host().is_empty());
    assert_eq!(u.path(), segs(&[b"", b"etc", b"hosts"]));
}

#[test]
fn parse_relative() {
    let u = Uri::parse("").unwrap();
    assert!(u.is_relative_reference());
    assert!(u.path().is_empty());
    assert_eq!(u.to_string(), "");

    let u = Uri::parse("foo/bar").unwrap();
    assert!(u.is_relative_reference());
    assert!(u.has_relative_path());
    assert_eq!(u.path(), segs(&[b"foo", b"bar"]));

    let u = Uri::parse("/foo").unwrap();
    assert!(u.is_relative_reference());
    assert!(!u.has_relative_path());
    assert_eq!(u.path(), segs(&[b"", b"foo"]));

    let u = Uri::parse("//example.com/foo").unwrap();
    assert!(u.is_relative_reference());
    assert_eq!(u.host(), b"example.com");
    assert_eq!(u.path(), segs(&[b"", b"foo"]));

    let u = Uri::parse("?q#f").unwrap();
    assert!(u.path().is_empty());
    assert_eq!(u.query(), Some(&b"q"[..]));
    assert_eq!(u.fragment(), Some(&b"f"[..]));
}

#[test]
fn path_segmentation() {
    for (given, expected) in [
        ("", &[][..]),
        ("/", &[&b""[..]][..]),
        ("/foo", &[&b""[..], b"foo"][..]),
        ("foo/", &[&b"foo"[..], b""][..]),
        ("/a//b", &[&b""[..], b"a", b"", b"b"][..]),
    ] {
        let u = Uri::parse(given).unwrap();
        assert_eq!(u.path(), segs(expected), "path of {given:?}");
    }
}

#[test]
fn empty_path_with_authority_becomes_root() {
    let a = Uri::parse("http://example.com").unwrap();
    let b = Uri::parse("http://example.com/").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.path(), segs(&[b""]));

    let a = Uri::parse("//example.com").unwrap();
    let b = Uri::parse("//example.com/").unwrap();
    assert_eq!(a, b);
}

#[test]
fn lowercases_scheme_and_host() {
    let u = Uri::parse("HTTP://www.EXAMPLE.com/").unwrap();
    assert_eq!(u.scheme(), Some("http"));
    assert_eq!(u.host(), b"www.example.com");
}

#[test]
fn decodes_components() {
    let u = Uri::parse("http://%41@%42/one%20two?a%3Db#c%2Fd").unwrap();
    assert_eq!(u.userinfo(), Some(&b"A"[..]));
    assert_eq!(u.host(), b"b");
    assert_eq!(u.path(), segs(&[b"", b"one two"]));
    assert_eq!(u.query(), Some(&b"a=b"[..]));
    assert_eq!(u.fragment(), Some(&b"c/d"[..]));

    // A decoded octet need not be UTF-8.
    let u = Uri::parse("/%bc").unwrap();
    assert_eq!(u.path(), segs(&[b"", b"\xbc"]));
    assert!(u.path_to_string().is_err());

    // A segment may hide a decoded slash.
    let u = Uri::parse("/foo%2Fbar").unwrap();
    assert_eq!(u.path(), segs(&[b"", b"foo/bar"]));
}

#[test]
fn userinfo_ends_at_first_at_sign() {
    let u = Uri::parse("//a@b@c/").unwrap_err();
    // The host may not contain a literal "@".
    assert_eq!((u.index(), u.kind()), (5, UnexpectedChar));

    let u = Uri::parse("//a%40b@c/").unwrap();
    assert_eq!(u.userinfo(), Some(&b"a@b"[..]));
    assert_eq!(u.host(), b"c");
}

#[test]
fn query_and_fragment_presence() {
    let u = Uri::parse("http://example.com?").unwrap();
    assert!(u.has_query());
    assert_eq!(u.query(), Some(&b""[..]));
    assert!(!u.has_fragment());

    let u = Uri::parse("http://example.com#").unwrap();
    assert!(u.has_fragment());
    assert_eq!(u.fragment(), Some(&b""[..]));
    assert!(!u.has_query());

    let u = Uri::parse("http://example.com").unwrap();
    assert!(!u.has_query());
    assert!(!u.has_fragment());

    let u = Uri::parse("?#").unwrap();
    assert_eq!(u.query(), Some(&b""[..]));
    assert_eq!(u.fragment(), Some(&b""[..]));
}

#[test]
fn ports() {
    let u = Uri::parse("http://example.com:0/").unwrap();
    assert_eq!(u.port(), Some(0));

    let u = Uri::parse("http://example.com:65535/").unwrap();
    assert_eq!(u.port(), Some(65535));

    let u = Uri::parse("http://example.com:00080/").unwrap();
    assert_eq!(u.port(), Some(80));

    let e = Uri::parse("http://example.com:65536/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));

    let e = Uri::parse("http://example.com:8080spam/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));

    let e = Uri::parse("http://example.com:-8080/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));

    let e = Uri::parse("http://example.com:/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (18, InvalidPort));

    let e = Uri::parse("//@www:example.com/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (6, InvalidPort));
}

#[test]
fn invalid_schemes() {
    let e = Uri::parse(":hello/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (0, UnexpectedChar));

    let e = Uri::parse("0http://example.com/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (0, UnexpectedChar));

    let e = Uri::parse("+http://example.com/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (0, UnexpectedChar));

    let e = Uri::parse("h~ttp://example.com/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (1, UnexpectedChar));

    // No colon before the first slash means no scheme.
    let u = Uri::parse("path/to:file").unwrap();
    assert_eq!(u.scheme(), None);
    assert_eq!(u.path(), segs(&[b"path", b"to:file"]));
}

#[test]
fn invalid_characters() {
    let e = Uri::parse("http://b b/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (8, UnexpectedChar));

    let e = Uri::parse("http://{}/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (7, UnexpectedChar));

    let e = Uri::parse("/a b").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, UnexpectedChar));

    let e = Uri::parse("?a^b").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, UnexpectedChar));

    let e = Uri::parse("#a b").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, UnexpectedChar));
}

#[test]
fn invalid_octets() {
    let e = Uri::parse("http://a%xy/").unwrap_err();
    assert_eq!((e.index(), e.kind()), (8, InvalidOctet));

    let e = Uri::parse("/a%2").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, InvalidOctet));

    let e = Uri::parse("?b%").unwrap_err();
    assert_eq!((e.index(), e.kind()), (2, InvalidOctet));

    let e = Uri::parse("//host%f").unwrap_err();
    assert_eq!((e.index(), e.kind()), (6, InvalidOctet));
}

#[test]
fn reference_classification() {
    for (given, relative_reference, relative_path) in [
        ("http://www.example.com/", false, false),
        ("http://www.example.com", false, false),
        ("/", true, false),
        ("foo", true, true),
        ("", true, true),
        ("//example.com/foo", true, false),
    ] {
        let u = Uri::parse(given).unwrap();
        assert_eq!(u.is_relative_reference(), relative_reference, "{given:?}");
        assert_eq!(u.has_relative_path(), relative_path, "{given:?}");
    }
}

#[test]
fn from_str_and_try_from() {
    let u: Uri = "http://example.com/".parse().unwrap();
    assert_eq!(u.scheme(), Some("http"));

    let u = Uri::try_from("//example.com").unwrap();
    assert_eq!(u.host(), b"example.com");

    assert!(Uri::try_from(String::from(":bad")).is_err());
}
