//! Whole-document tests for the parsing module.
//!
//! Every parsed document is also run through the structural invariant checks
//! in [`snapshot::invariants`](crate::parsing::snapshot::invariants).

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document, MAX_NESTING, ParseReport,
    blocks::{Alignment, Block, CalloutKind},
    diagnostics::Degradation,
    inline::Inline,
    parse_document, parse_with_report,
    snapshot::{check_invariants, outline},
};

fn parse_checked(text: &str) -> Document {
    let doc = parse_document(text);
    check_invariants(&doc);
    doc
}

fn para(text: &str) -> Block {
    Block::Paragraph {
        inline: vec![Inline::text(text)],
    }
}

// Invariant tests

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("**")]
#[case("`")]
#[case("[")]
#[case("[a](")]
#[case("| |\n|-|")]
#[case("```")]
#[case(">")]
#[case("> >")]
#[case("-")]
#[case("1.")]
#[case("*Memory*:")]
#[case("~~~~")]
#[case("_ _ _")]
#[case("\t\t-\t*")]
fn degenerate_input_never_panics(#[case] text: &str) {
    parse_checked(text);
}

#[test]
fn whitespace_only_is_empty_and_reported() {
    let ParseReport {
        document,
        degradations,
    } = parse_with_report("  \n\t\n");
    assert!(document.is_empty());
    assert_eq!(degradations, vec![Degradation::EmptyInput]);
}

#[test]
fn parsing_is_deterministic() {
    let text = "# A\n\n- b\n  - c\n\n> d **e**\n\n| f |\n|---|\n| g |";
    assert_eq!(parse_document(text), parse_document(text));
}

#[test]
fn crlf_matches_lf() {
    let lf = "# A\n\n- b\n- c\n\n```\nx\n```";
    assert_eq!(parse_document(&lf.replace('\n', "\r\n")), parse_document(lf));
}

#[test]
fn clean_document_has_no_degradations() {
    let report = parse_with_report("# Title\n\nSome **bold** and `code`.\n\n- a\n- b");
    assert!(report.degradations.is_empty(), "{:?}", report.degradations);
}

// Documented examples

#[test]
fn aligned_table() {
    let doc = parse_checked("| A | B |\n|:--|--:|\n| 1 | 2 |");
    let [Block::Table(table)] = doc.blocks.as_slice() else {
        panic!("expected one table, got {doc:?}");
    };
    assert_eq!(table.alignment, vec![Alignment::Left, Alignment::Right]);
    assert_eq!(table.headers.len(), 2);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn malformed_table_falls_back_to_paragraph() {
    let report = parse_with_report("| Header |\n| Cell");
    check_invariants(&report.document);
    assert_eq!(report.document.blocks, vec![para("| Header | | Cell")]);
}

#[test]
fn unterminated_fence_is_literal() {
    let report = parse_with_report("```javascript\nconst x = 1;");
    assert_eq!(
        report.document.blocks,
        vec![para("```javascript\nconst x = 1;")]
    );
    assert_eq!(
        report.degradations,
        vec![Degradation::UnterminatedFence {
            language: Some("javascript".into())
        }]
    );
}

#[test]
fn three_rules() {
    assert_eq!(
        parse_checked("---\n\n---\n\n---").blocks,
        vec![Block::HorizontalRule; 3]
    );
}

#[test]
fn memory_callout_with_bold_body() {
    assert_eq!(
        parse_checked("*Memory*: **important** fact").blocks,
        vec![Block::Callout {
            kind: CalloutKind::Memory,
            inline: vec![
                Inline::Bold(vec![Inline::text("important")]),
                Inline::text(" fact"),
            ],
        }]
    );
}

#[test]
fn callout_label_is_case_sensitive() {
    assert_eq!(
        parse_checked("*memory*: lower").blocks,
        vec![para("*memory*: lower")]
    );
}

#[test]
fn list_inside_quote() {
    let doc = parse_checked("> - a\n> - b");
    insta::assert_snapshot!(outline(&doc), @r#"
    Blockquote
      List(bullet)
        Item
          Paragraph
            Text "a"
        Item
          Paragraph
            Text "b"
    "#);
}

#[test]
fn table_inside_fence_stays_raw() {
    let text = "```\n| A | B |\n| - | - |\n| 1 | 2 |\n```";
    assert_eq!(
        parse_checked(text).blocks,
        vec![Block::CodeBlock {
            language: None,
            raw: "| A | B |\n| - | - |\n| 1 | 2 |".into(),
        }]
    );
}

// Text handling

#[rstest]
#[case::special_characters("Special: <>&\"'{}#$%^", "Special: <>&\"'{}#$%^")]
#[case::emoji("Hello 👋 world 🌍", "Hello 👋 world 🌍")]
#[case::non_latin("こんにちは 世界 Привет мир", "こんにちは 世界 Привет мир")]
#[case::literal_star("2 * 3 = 6", "2 * 3 = 6")]
fn plain_text_survives(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(parse_checked(text).blocks, vec![para(expected)]);
}

#[test]
fn emphasis_around_multibyte_text() {
    assert_eq!(
        parse_checked("👋 **wörld** _日本_").blocks,
        vec![Block::Paragraph {
            inline: vec![
                Inline::text("👋 "),
                Inline::Bold(vec![Inline::text("wörld")]),
                Inline::text(" "),
                Inline::Italic(vec![Inline::text("日本")]),
            ]
        }]
    );
}

#[test]
fn long_paragraph_is_one_block() {
    let text = vec!["word **bold** more"; 2000].join("\n");
    let doc = parse_checked(&text);
    let [Block::Paragraph { inline }] = doc.blocks.as_slice() else {
        panic!("expected one paragraph");
    };
    assert_eq!(
        inline
            .iter()
            .filter(|node| matches!(node, Inline::Bold(_)))
            .count(),
        2000
    );
}

// Nesting

#[test]
fn deeply_nested_quotes() {
    let depth = 64;
    let text = format!("{} deep", ">".repeat(depth));
    let doc = parse_checked(&text);

    let mut blocks = &doc.blocks;
    for _ in 0..depth {
        let [Block::Blockquote { blocks: inner }] = blocks.as_slice() else {
            panic!("expected a single nested quote, got {blocks:?}");
        };
        blocks = inner;
    }
    assert_eq!(blocks, &vec![para("deep")]);
}

#[test]
fn deeply_nested_lists() {
    let depth = 32;
    let text = (0..depth)
        .map(|level| format!("{}- item {level}", "  ".repeat(level)))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = parse_checked(&text);

    let mut blocks = &doc.blocks;
    for level in 0..depth {
        let Some(Block::List(list)) = blocks.first() else {
            panic!("expected a list at level {level}, got {blocks:?}");
        };
        assert_eq!(list.items.len(), 1);
        let item = &list.items[0].blocks;
        assert_eq!(item[0], para(&format!("item {level}")));
        blocks = item;
        if level + 1 < depth {
            assert_eq!(item.len(), 2);
        }
    }
}

#[test]
fn quote_nesting_past_limit_stays_literal() {
    let depth = 100_000;
    let ParseReport {
        document,
        degradations,
    } = parse_with_report(&">".repeat(depth));
    check_invariants(&document);

    let mut blocks = &document.blocks;
    for _ in 0..MAX_NESTING {
        let [Block::Blockquote { blocks: inner }] = blocks.as_slice() else {
            panic!("expected a single nested quote");
        };
        blocks = inner;
    }
    assert_eq!(blocks, &vec![para(&">".repeat(depth - MAX_NESTING))]);
    assert_eq!(
        degradations,
        vec![Degradation::NestingTooDeep { limit: MAX_NESTING }]
    );
}

#[test]
fn list_nesting_past_limit_stays_literal() {
    let depth = 1_000;
    let ParseReport {
        document,
        degradations,
    } = parse_with_report(&format!("{}x", "- ".repeat(depth)));
    check_invariants(&document);

    let mut blocks = &document.blocks;
    for level in 0..MAX_NESTING {
        let [Block::List(list)] = blocks.as_slice() else {
            panic!("expected a single nested list at level {level}");
        };
        assert_eq!(list.items.len(), 1);
        blocks = &list.items[0].blocks;
    }
    let rest = format!("{}x", "- ".repeat(depth - MAX_NESTING));
    assert_eq!(blocks, &vec![para(&rest)]);
    assert_eq!(
        degradations,
        vec![Degradation::NestingTooDeep { limit: MAX_NESTING }]
    );
}

#[test]
fn nesting_within_limit_is_not_reported() {
    let text = format!("{} deep", ">".repeat(MAX_NESTING - 1));
    assert!(parse_with_report(&text).degradations.is_empty());
}

// Large adversarial lines finish and stay literal. Each would take seconds if
// every unmatched opener rescanned the rest of the line.

#[rstest]
#[case::underscores("_a ".repeat(50_000))]
#[case::brackets("[".repeat(50_000))]
#[case::open_links("[a](".repeat(20_000))]
#[case::intraword_underscores("a_b ".repeat(50_000))]
fn unmatched_openers_stay_literal_at_scale(#[case] line: String) {
    let ParseReport {
        document,
        degradations,
    } = parse_with_report(&line);
    assert_eq!(document.blocks, vec![para(line.trim())]);
    assert!(
        degradations
            .iter()
            .all(|d| matches!(d, Degradation::UnmatchedDelimiter { .. }))
    );
}

#[test]
fn many_spans_on_one_line() {
    let line = "**b** _i_ `c` [l](h) ".repeat(5_000);
    let doc = parse_checked(&line);
    let [Block::Paragraph { inline }] = doc.blocks.as_slice() else {
        panic!("expected one paragraph");
    };
    // Eight nodes per repeat, less the trimmed trailing space.
    assert_eq!(inline.len(), 5_000 * 8 - 1);
}

#[test]
fn mixed_document_outline() {
    let text = "\
# Project

*Next Goal*: ship it

1. first
2. second
   > quoted `code`

| Name | Link |
|------|:----:|
| docs | [here](https://example.com) |

---";
    insta::assert_snapshot!(outline(&parse_checked(text)), @r#"
    Heading(1)
      Text "Project"
    Callout(Next Goal)
      Text "ship it"
    List(ordered, start=1)
      Item
        Paragraph
          Text "first"
      Item
        Paragraph
          Text "second"
        Blockquote
          Paragraph
            Text "quoted "
            Code "code"
    Table(None, Center)
      Header
        Cell
          Text "Name"
        Cell
          Text "Link"
      Row
        Cell
          Text "docs"
        Cell
          Link "https://example.com"
            Text "here"
    HorizontalRule
    "#);
}

// Visible text

#[rstest]
#[case::emphasis("**bold** _it_ ~~gone~~ `code`", "bold it gone code")]
#[case::link("see [the docs](https://example.com) now", "see the docs now")]
#[case::unmatched("**open _and [half", "**open _and [half")]
#[case::snake_case("call snake_case_name()", "call snake_case_name()")]
#[case::crossed("**a _b** c_", "a _b c_")]
fn no_visible_character_dropped(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(parse_checked(text).visible_text(), expected);
}

#[test]
fn visible_text_covers_nested_blocks() {
    let doc = parse_checked("> - one\n>   two\n\n| h |\n|---|\n| c |\n\n*Next Goal*: go");
    assert_eq!(doc.visible_text(), "one two\nh\nc\nNext Goal\ngo");
}
