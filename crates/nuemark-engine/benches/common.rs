// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with *some* content and a [link][ref].\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust numbered\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n[ref]: /reference \"Reference\"\n\n";
    format!("---\ntitle: Benchmark\n---\n# Title\n\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_nested_tags(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n\n", section));
        content.push_str(&generate_nested_tag(depth, 0));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_tag(remaining_depth: usize, indent: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let pad = " ".repeat(indent);
    let mut content = String::new();
    content.push_str(&format!("{pad}[box.level-{remaining_depth}]\n"));
    content.push_str(&format!("{pad}  Tag body with **strong** text.\n\n"));
    content.push_str(&format!("{pad}  > quoted line\n\n"));
    content.push_str(&generate_nested_tag(remaining_depth - 1, indent + 2));
    content
}
