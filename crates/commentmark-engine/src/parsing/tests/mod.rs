//! Tests for the parsing module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in
//! `fixtures/`. Every fixture is converted with context id `42`.


use pretty_assertions::assert_eq;

use crate::models::RenderedBlock;
use crate::parsing::{convert, parse_document};

// Fixture-based tests

#[test]
fn fixture_reply_thread() {
    assert_fixture("reply_thread");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_code() {
    assert_fixture("code");
}

#[test]
fn fixture_references() {
    assert_fixture("references");
}

#[test]
fn fixture_escapes() {
    assert_fixture("escapes");
}

#[test]
fn fixture_emphasis() {
    assert_fixture("emphasis");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = convert(&md, "42");
    invariants::check(&html);
    assert_eq!(html, expected.trim_end_matches('\n'));
}

// Invariant tests

/// Awkward inputs still terminate and never leak raw markup characters.
#[test]
fn hostile_inputs_stay_well_formed() {
    let inputs = [
        "",
        "\0",
        "<",
        "&",
        "&&&;",
        "<<>>",
        "<script>alert(1)</script>",
        "`",
        "``",
        "```",
        "`` ` ``",
        "[",
        "[]",
        "[][]",
        "[a][",
        "![",
        "![a](",
        "\\",
        "\\\\",
        "*",
        "***",
        "*_*_*_",
        "__*__*",
        "Re #",
        "Re #99999999999999999999999999: big",
        "~~~~",
        "~~~~\n<b>",
        "> ",
        ">",
        "1.",
        "- ",
        "-\t-\t-",
        "    ",
        "\r\n\r\n",
        "a\0*b\0*",
        "ünïcödé *émphasis* `cödé`",
        "[x][y]\n[y]: /z \"T\"",
    ];
    for input in inputs {
        let html = convert(input, "ctx");
        invariants::check(&html);
    }
}

/// Separator-only lines never open a paragraph.
#[test]
fn separators_are_never_paragraphs() {
    for line in ["---", "***", "___", "- - -", "* * * *", "_ _ _"] {
        assert_eq!(convert(line, "c"), "<hr>", "for {line:?}");
    }
}

/// Each escapable character survives as a literal.
#[test]
fn escaped_punctuation_is_literal() {
    for ch in ['*', '_', '`', '[', ']', '(', ')', '#', '+', '-', '!', '\\'] {
        let html = convert(&format!("x \\{ch}a\\{ch} y"), "c");
        assert_eq!(html, format!("<p>x {ch}a{ch} y"), "for {ch:?}");
    }
}

/// Definitions apply to uses earlier in the document.
#[test]
fn references_are_order_independent() {
    let html = convert("[a][1]\n\n[1]: http://x \"T\"", "c");
    assert_eq!(html, r#"<p><a href="http://x" title="T">a</a>"#);
}

/// A second conversion never sees the first one's references.
#[test]
fn references_do_not_leak_between_documents() {
    convert("[1]: http://first", "a");
    assert_eq!(convert("[a][1]", "b"), "<p>[a][1]");
}

/// Emphasis runs to the last closing delimiter that can end it.
#[test]
fn emphasis_spans_to_the_farthest_close() {
    assert_eq!(convert("*a* b *c* d", "c"), "<p><i>a* b *c</i> d");
    assert_eq!(convert("**a** and **b** x", "c"), "<p><b>a** and **b</b> x");
}

/// Only ASCII whitespace counts for blank lines and hard breaks.
#[test]
fn non_breaking_spaces_are_text() {
    assert_eq!(convert("a\u{a0}\u{a0}\nb", "c"), "<p>a\u{a0}\u{a0} b");
    assert_eq!(convert("a\n\u{a0}\nb", "c"), "<p>a \u{a0} b");
}

#[test]
fn empty_document() {
    assert!(parse_document("", "c").blocks().is_empty());
    assert_eq!(convert("", "c"), "");
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n", "c").blocks().is_empty());
}

#[test]
fn parse_document_exposes_blocks() {
    let doc = parse_document("intro\n\n- a\n- b\n\n---", "c");
    assert_eq!(
        doc.blocks(),
        &[
            RenderedBlock::Paragraph("intro".into()),
            RenderedBlock::BulletedList(vec!["a".into(), "b".into()]),
            RenderedBlock::Separator,
        ]
    );
}
