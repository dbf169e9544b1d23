//! List Builder.

use super::{
    kinds::{ListMarker, MarkerStyle},
    segmenter::segment,
    types::{List, ListItem},
};
use crate::parsing::{
    diagnostics::Diagnostics,
    lines::{indent_of, is_blank, strip_indent},
};

/// Returns the end (exclusive) of the list span that starts at `start`.
///
/// The span holds marker lines and lines indented deeper than the outermost
/// marker seen so far. Blank lines are kept when the next non-blank line
/// still belongs to the list.
pub fn span_end(lines: &[&str], start: usize) -> usize {
    let mut outer = indent_of(lines[start]);
    let mut end = start + 1;
    let mut j = start + 1;

    while j < lines.len() {
        let line = lines[j];
        if is_blank(line) {
            match lines[j..].iter().position(|l| !is_blank(l)) {
                Some(offset) if belongs(lines[j + offset], outer) => {
                    j += offset;
                    continue;
                }
                _ => break,
            }
        }
        if !belongs(line, outer) {
            break;
        }
        if let Some(marker) = ListMarker::parse(line) {
            outer = outer.min(marker.indent);
        }
        j += 1;
        end = j;
    }
    end
}

fn belongs(line: &str, outer: usize) -> bool {
    ListMarker::parse(line).is_some() || indent_of(line) > outer
}

/// An item collecting its dedented source lines.
struct OpenItem<'a> {
    content_col: usize,
    lines: Vec<&'a str>,
}

/// A list being collected: all items share a marker style and column.
struct OpenList<'a> {
    style: MarkerStyle,
    start: Option<u64>,
    column: usize,
    items: Vec<OpenItem<'a>>,
}

/// Builds lists from a span of marker and continuation lines.
///
/// Items are grouped at their marker's column. Deeper lines, including deeper
/// markers, are continuation content: dedented by the item's content column
/// and parsed again as blocks, so items may hold paragraphs, nested lists,
/// quotes, tables and fenced code. A change of marker style or column starts
/// a new sibling list. Lines before the first marker are ignored.
pub fn build<S: AsRef<str>>(lines: &[S]) -> Vec<List> {
    build_with(lines, &mut Diagnostics::default(), 0)
}

pub(crate) fn build_with<S: AsRef<str>>(
    lines: &[S],
    diag: &mut Diagnostics,
    depth: usize,
) -> Vec<List> {
    let mut done: Vec<OpenList<'_>> = vec![];
    let mut current: Option<OpenList<'_>> = None;

    for line in lines.iter().map(AsRef::as_ref) {
        let marker = ListMarker::parse(line)
            .filter(|m| current.as_ref().is_none_or(|list| m.indent <= list.column));

        if let Some(marker) = marker {
            if let Some(list) = current.take_if(|list| {
                list.style != marker.style || list.column != marker.indent
            }) {
                done.push(list);
            }
            let list = current.get_or_insert_with(|| OpenList {
                style: marker.style,
                start: marker.number,
                column: marker.indent,
                items: vec![],
            });
            list.items.push(OpenItem {
                content_col: marker.content_col,
                lines: vec![marker.content],
            });
        } else if let Some(item) = current.as_mut().and_then(|list| list.items.last_mut()) {
            item.lines.push(strip_indent(line, item.content_col));
        } else {
            log::trace!("ignoring line before first list marker: {line:?}");
        }
    }
    done.extend(current);

    let mut lists = Vec::with_capacity(done.len());
    for list in done {
        let mut items = Vec::with_capacity(list.items.len());
        for item in list.items {
            items.push(ListItem {
                blocks: segment(&item.lines.join("\n"), diag, depth + 1),
            });
        }
        lists.push(List {
            ordered: list.style == MarkerStyle::Ordered,
            start: list.start,
            items,
        });
    }
    lists
}
