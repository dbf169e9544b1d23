// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| A | B |\n|:--|--:|\n| 1 | `2` |\n\n*Memory*: remember this.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);
    let quote_prefix = "> ".repeat(current_level - 1);

    content.push_str(&format!(
        "{} Subsection Level {}\n\n",
        header_prefix, current_level
    ));
    content.push_str(&format!(
        "{}Quoted paragraph with **bold _nested_ text** and `code`.\n\n",
        quote_prefix
    ));

    // Nested bullets
    for i in 0..3 {
        let indent = "  ".repeat(i);
        content.push_str(&format!(
            "{}- Item {} at level {}\n",
            indent, i, current_level
        ));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n    println!(\"{}\", value);\n}\n```\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    (0..words)
        .map(|i| match i % 5 {
            0 => format!("**w{i}**"),
            1 => format!("_w{i}_"),
            2 => format!("`w{i}`"),
            3 => format!("[w{i}](https://example.com/{i})"),
            _ => format!("snake_case_{i}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
