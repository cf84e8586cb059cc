use commentmark_engine::{RenderedBlock, convert, parse_document};

#[test]
fn reply_with_titled_link() {
    let html = convert(r#"Re #5: see [here](http://x.com "X")"#, "42");
    insta::assert_snapshot!(html, @r#"<p>Re <a href='#42-5'>#5</a>: see <a href="http://x.com" title="X">here</a>"#);
}

#[test]
fn nested_emphasis() {
    let html = convert("**bold *and italic* text**", "c");
    insta::assert_snapshot!(html, @"<p><b>bold <i>and italic</i> text</b>");
}

#[test]
fn reference_used_before_definition() {
    let html = convert("[a][1]\n\n[1]: http://x \"T\"", "c");
    insta::assert_snapshot!(html, @r#"<p><a href="http://x" title="T">a</a>"#);
}

#[test]
fn indented_line_after_blank_loosens_list() {
    let html = convert("- item\n\n    more\n- next", "c");
    insta::assert_snapshot!(html, @"<ul><li><p>item<p>more<li><p>next</ul>");
}

#[test]
fn indented_line_without_blank_stays_tight() {
    let html = convert("- item\n    more\n- next", "c");
    insta::assert_snapshot!(html, @"<ul><li>item more<li>next</ul>");
}

#[test]
fn double_tick_code_span_keeps_single_tick() {
    let html = convert("``a`b``", "c");
    insta::assert_snapshot!(html, @"<p><code>a`b</code>");
}

#[test]
fn separator_between_paragraphs() {
    let html = convert("above\n* * *\nbelow", "c");
    insta::assert_snapshot!(html, @"<p>above<hr><p>below");
}

#[test]
fn autolinks_and_entities() {
    let html = convert("<https://example.com> or <me@example.com> &copy; a&b", "c");
    insta::assert_snapshot!(html, @r#"<p><a href="https://example.com">https://example.com</a> or <a href="mailto:me@example.com">me@example.com</a> &copy; a&amp;b"#);
}

#[test]
fn quote_and_numbered_list() {
    let html = convert("> first\n> second  \n> third\n1. one\n2. two", "c");
    insta::assert_snapshot!(html, @"<blockquote>first second   <br>third</blockquote><ol><li>one<li>two</ol>");
}

#[test]
fn reply_header_alone() {
    // Trailing space after the colon is part of the prefix.
    let html = convert("Re #007:", "thread-9");
    assert_eq!(html, "<p>Re <a href='#thread-9-7'>#7</a>: ");
}

#[test]
fn windows_line_endings() {
    let doc = parse_document("one\r\ntwo\r\n\r\n~~~~\r\ncode\r\n~~~~\r\n", "c");
    assert_eq!(
        doc.blocks(),
        &[
            RenderedBlock::Paragraph("one two".into()),
            RenderedBlock::Code("code".into()),
        ]
    );
}
