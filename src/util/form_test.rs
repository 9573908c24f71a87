use super::*;

#[test]
fn urlencode_passes_unreserved_through() {
    assert_eq!(urlencode("admin123.-_~"), "admin123.-_~");
}

#[test]
fn urlencode_escapes_spaces_as_plus() {
    assert_eq!(urlencode("a b c"), "a+b+c");
}

#[test]
fn urlencode_escapes_reserved_bytes() {
    assert_eq!(urlencode("p&ss=w?rd"), "p%26ss%3Dw%3Frd");
}

#[test]
fn urlencode_escapes_multibyte_utf8() {
    assert_eq!(urlencode("é"), "%C3%A9");
}

#[test]
fn encode_pairs_joins_with_ampersand() {
    let body = encode_pairs(&[("username", "admin"), ("password", "admin 123")]);
    assert_eq!(body, "username=admin&password=admin+123");
}

#[test]
fn encode_pairs_empty_is_empty() {
    assert_eq!(encode_pairs(&[]), "");
}
