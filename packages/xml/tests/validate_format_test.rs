//! Validation diagnostics and formatting behaviour on whole documents

use devkit_xml::{format, validate, FormatError, XmlFormatter};
use proptest::prelude::*;

#[test]
fn test_idle_input() {
    assert_eq!(validate(""), Ok(()));
    assert_eq!(validate(" \n "), Ok(()));
    assert_eq!(format("\t"), Ok(String::new()));
}

#[test]
fn test_well_formed_documents_validate() {
    for doc in [
        "<a/>",
        "<a x=\"1\" y='two'>text &amp; more</a>",
        "<?xml version=\"1.0\"?>\n<!-- note -->\n<root><child/></root>",
        "<r><![CDATA[<not-a-tag>]]></r>",
    ] {
        assert_eq!(validate(doc), Ok(()), "{doc}");
    }
}

#[test]
fn test_structural_failures() {
    let cases = [
        ("<a><b></a>", "mismatched nesting"),
        ("<a>", "unclosed element"),
        ("</a>", "stray closing tag"),
        ("<a/><b/>", "two roots"),
        ("hello <a/>", "text before the root"),
        ("<a/> trailing", "text after the root"),
        ("<!-- only a comment -->", "no root"),
        ("<a>&bogus;</a>", "unknown entity"),
        ("<a x=\"1\" x=\"2\"/>", "duplicate attribute"),
        ("<a>\u{1}</a>", "control character in text"),
        ("<a>\0</a>", "NUL in text"),
        ("<1a/>", "name starting with a digit"),
        ("<a\u{1}/>", "control character in a name"),
        ("<a 9x=\"1\"/>", "attribute name starting with a digit"),
        ("<a x=\"\u{2}\"/>", "control character in an attribute value"),
        ("<a><![CDATA[\u{1b}]]></a>", "control character in CDATA"),
        (
            "<?xml version=\"1.0\"?><?xml version=\"1.0\"?><a/>",
            "second XML declaration",
        ),
        ("<a/><?xml version=\"1.0\"?>", "declaration after the root"),
    ];
    for (doc, why) in cases {
        let err = validate(doc).expect_err(why);
        assert!(err.position <= doc.len(), "{why}: position {} out of range", err.position);
        assert!(!err.message.is_empty(), "{why}");
    }
}

#[test]
fn test_invalid_characters_are_reported() {
    let err = validate("<a>ok\u{1}</a>").expect_err("control character");
    assert_eq!(err.message, "invalid character U+0001");
    assert!(matches!(format("<a>\u{1}</a>"), Err(FormatError::Invalid(_))));

    let err = validate("<1a/>").expect_err("bad name");
    assert!(err.message.contains("invalid name"), "{}", err.message);
}

#[test]
fn test_leading_declaration_is_accepted() {
    assert_eq!(validate("<?xml version=\"1.0\"?><a>\t\r\n</a>"), Ok(()));
}

#[test]
fn test_multiple_roots_message() {
    let err = validate("<a/><b/>").expect_err("two roots");
    assert_eq!(err.message, "multiple root elements");
}

#[test]
fn test_unclosed_reports_element_name() {
    let err = validate("<outer><inner/>").expect_err("unclosed");
    assert_eq!(err.message, "unclosed element <outer>");
    assert_eq!(err.position, "<outer><inner/>".len());
}

#[test]
fn test_format_refuses_invalid_input() {
    let err = format("<a><b></a>").expect_err("mismatched");
    assert!(matches!(err, FormatError::Invalid(_)));
}

#[test]
fn test_prolog_and_attributes_are_preserved() {
    let doc = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><!-- c --><cfg mode=\"a&amp;b\"><item id='1'/><item id='2'>x</item></cfg>";
    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                    <!-- c -->\n\
                    <cfg mode=\"a&amp;b\">\n  \
                    <item id='1'/>\n  \
                    <item id='2'>x</item>\n\
                    </cfg>";
    assert_eq!(format(doc).expect("well-formed"), expected);
}

#[test]
fn test_formatting_is_idempotent() {
    let formatter = XmlFormatter::with_indent(3);
    let once = formatter
        .format("<a>lead<b> <c>t</c></b>tail<d/><e></e></a>")
        .expect("well-formed");
    assert_eq!(formatter.format(&once).expect("still well-formed"), once);
}

#[test]
fn test_format_error_kinds_map_to_common_kinds() {
    let err: devkit_common::Error = format("<a>").expect_err("unclosed").into();
    assert_eq!(err.kind(), &devkit_common::ErrorKind::Validation);
}

fn element() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z]{1,6}".prop_map(|name| format!("<{name}/>")),
        ("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,12}").prop_map(|(name, text)| format!("<{name}>{text}</{name}>")),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 0..4), "[ \n]{0,3}").prop_map(|(name, children, gap)| {
            format!("<{name}>{gap}{}{gap}</{name}>", children.join(&gap))
        })
    })
}

proptest! {
    #[test]
    fn prop_generated_documents_validate_and_format_idempotently(doc in element()) {
        prop_assert_eq!(validate(&doc), Ok(()));
        let once = format(&doc).expect("generated documents are well-formed");
        let twice = format(&once).expect("formatted output is well-formed");
        prop_assert_eq!(once, twice);
    }
}
