//! Plain-text transcript parsing.
//!
//! A transcript line mirrors one scraped log entry. Player names appear in
//! brackets with an optional color (`[Amber|#e27174]` or `[Amber]`), icons
//! in braces (`{wool}`), and everything else is literal text. A line may
//! carry an explicit entry index prefix (`12 | ...`), a run of three or
//! more dashes stands for a visual divider, and `#` opens a comment.

use tallytable_foundation::{Error, Result};
use tallytable_parser::{RawEntry, Span};

/// One parsed transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLine {
    /// An empty or whitespace-only line.
    Blank,
    /// A `#`-prefixed comment line.
    Comment,
    /// A log entry, with its explicit index when the line carried one.
    Entry {
        /// The `N |` prefix value, if present.
        index: Option<u64>,
        /// The reassembled entry.
        entry: RawEntry,
    },
}

/// Parses one transcript line.
///
/// # Errors
///
/// Returns a transcript error, with a 1-based column, for an unclosed
/// bracket or brace span or an index prefix that overflows.
pub fn parse_line(line: &str) -> Result<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ParsedLine::Blank);
    }
    if trimmed.starts_with('#') {
        return Ok(ParsedLine::Comment);
    }

    let (index, content, offset) = split_index(line)?;
    let entry = parse_spans(content, offset)?;
    Ok(ParsedLine::Entry { index, entry })
}

/// Splits a leading `N |` index prefix off the line.
///
/// Lines whose leading digits are not followed by a bar are ordinary
/// content. Returns the index, the remaining content, and the content's
/// byte offset within the line.
fn split_index(line: &str) -> Result<(Option<u64>, &str, usize)> {
    let start = line.len() - line.trim_start().len();
    let trimmed = &line[start..];
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits == 0 {
        return Ok((None, line, 0));
    }
    let after = &trimmed[digits..];
    let gap = after.len() - after.trim_start().len();
    let Some(rest) = after[gap..].strip_prefix('|') else {
        return Ok((None, line, 0));
    };
    let index = trimmed[..digits]
        .parse()
        .map_err(|_| Error::transcript("entry index out of range", Some(start + 1)))?;
    let offset = line.len() - rest.len();
    Ok((Some(index), rest, offset))
}

/// Reassembles the span structure of one entry from its textual form.
fn parse_spans(content: &str, base: usize) -> Result<RawEntry> {
    let trimmed = content.trim();
    if trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-') {
        return Ok(RawEntry::new().with_divider());
    }

    let mut entry = RawEntry::new();
    let mut text = String::new();
    let mut i = 0;
    while i < content.len() {
        let rest = &content[i..];
        if let Some(inner) = rest.strip_prefix('[') {
            let Some(end) = inner.find(']') else {
                return Err(Error::transcript(
                    "unclosed player span",
                    Some(base + i + 1),
                ));
            };
            flush_text(&mut entry, &mut text);
            let body = &inner[..end];
            let (name, color) = match body.split_once('|') {
                Some((name, color)) => (name, Some(color)),
                None => (body, None),
            };
            entry.push(Span::Styled {
                text: name.to_owned(),
                color: color.map(str::to_owned),
            });
            i += end + 2;
        } else if let Some(inner) = rest.strip_prefix('{') {
            let Some(end) = inner.find('}') else {
                return Err(Error::transcript("unclosed icon span", Some(base + i + 1)));
            };
            flush_text(&mut entry, &mut text);
            entry.push(Span::Icon(inner[..end].to_owned()));
            i += end + 2;
        } else {
            let step = rest.find(['[', '{']).unwrap_or(rest.len());
            text.push_str(&rest[..step]);
            i += step;
        }
    }
    flush_text(&mut entry, &mut text);
    Ok(entry)
}

fn flush_text(entry: &mut RawEntry, text: &mut String) {
    if !text.is_empty() {
        entry.push(Span::Text(std::mem::take(text)));
    }
}
