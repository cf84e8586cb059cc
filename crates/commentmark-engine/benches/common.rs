// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_comment(size: usize) -> String {
    let base = "Re #12: I think **this is *mostly* right**, see [the docs][docs] and `cargo run`.\nSecond line with <https://example.com> & an escaped \\*star\\*.\n\n- first point\n- second point  \n  continued\n\n> quoted reply\n> more quote\n\n    fn example() {\n        println!(\"{}\", 1 < 2);\n    }\n\n";
    let mut content = base.repeat(size);
    content.push_str("[docs]: https://docs.example.com \"Docs\"\n");
    content
}

#[allow(dead_code)]
pub fn generate_thread(comments: usize) -> Vec<(String, String)> {
    (0..comments)
        .map(|i| (i.to_string(), generate_comment(1 + i % 4)))
        .collect()
}
