//! `readme.txt` parser
//!
//! The header (title, meta block, short description) is split with a single
//! anchored regex. Sections and subsections need "up to the next delimiter or
//! end of input" matching, which the `regex` crate cannot express without
//! lookahead, so they are found by [`scan_blocks`].

use super::document::{Document, MetaBlock, Section, Subsection};
use super::error::ReadmeError;
use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\A=== (.+?) ===\n((?s:.)+?)\n\n((?s:.)+?)\n((?s:.)+)").expect("valid block regex"));

static RE_META_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A(.+?):\s+(.+)\z").expect("valid meta regex"));

/// Parse a full `readme.txt` buffer
///
/// Fails without producing a partial document if any structural part is
/// missing.
pub fn parse(input: &str) -> Result<Document, ReadmeError> {
  let input = input.replace("\r\n", "\n");

  let caps = RE_BLOCK.captures(&input).ok_or(ReadmeError::MalformedMetadataBlock)?;
  let (title, meta, description, rest) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
    (Some(t), Some(m), Some(d), Some(r)) => (t.as_str(), m.as_str(), d.as_str(), r.as_str()),
    _ => return Err(ReadmeError::MalformedMetadataBlock),
  };

  Ok(Document {
    title: title.to_string(),
    description: description.to_string(),
    meta: parse_meta_block(meta)?,
    sections: parse_sections(rest)?,
  })
}

fn parse_meta_block(input: &str) -> Result<MetaBlock, ReadmeError> {
  let mut meta = MetaBlock::default();

  for line in input.split('\n') {
    let caps = RE_META_LINE.captures(line).ok_or_else(|| ReadmeError::MetaBlockParseError {
      line: line.to_string(),
    })?;
    meta.insert(&caps[1], &caps[2]);
  }

  Ok(meta)
}

fn parse_sections(input: &str) -> Result<Vec<Section>, ReadmeError> {
  let blocks = scan_blocks(input, "==");
  if blocks.is_empty() {
    return Err(ReadmeError::SectionParseError {
      reason: "no '== Section ==' heading after the short description".to_string(),
    });
  }

  let sections = blocks
    .into_iter()
    .map(|(heading, content)| {
      let content = content.trim();
      let (body, tail) = match split_body(content) {
        Some((body, tail)) => (Some(body.trim_end().to_string()), tail),
        None => (None, content),
      };

      Section {
        heading: heading.to_string(),
        body,
        subsections: parse_subsections(tail),
      }
    })
    .collect();

  Ok(sections)
}

fn parse_subsections(input: &str) -> Vec<Subsection> {
  scan_blocks(input, "=")
    .into_iter()
    .map(|(heading, body)| Subsection {
      heading: heading.trim().to_string(),
      body: body.trim().to_string(),
    })
    .collect()
}

/// Split section content into leading free text and the subsection tail
///
/// The leading text must start with something other than `=` and run to the
/// first line that starts with `=`. Returns `None` when the content opens with
/// a subsection (or is too short to hold any text).
fn split_body(content: &str) -> Option<(&str, &str)> {
  let mut chars = content.char_indices();
  let (_, first) = chars.next()?;
  if first == '=' {
    return None;
  }
  let (second_at, second) = chars.next()?;
  let search_from = second_at + second.len_utf8();

  let end = content[search_from..]
    .find("\n=")
    .map(|i| search_from + i)
    .unwrap_or(content.len());

  Some(content.split_at(end))
}

/// Find `<marker> Heading <marker>` blocks in document order
///
/// A block starts at the beginning of `input` or right after a newline. The
/// heading runs to the first ` <marker>\n`; the content runs to the next
/// `\n<marker> ` or the end of input. Both must be non-empty. Text that does
/// not belong to any block is skipped.
fn scan_blocks<'a>(input: &'a str, marker: &str) -> Vec<(&'a str, &'a str)> {
  let open = format!("{} ", marker);
  let close = format!(" {}\n", marker);
  let next = format!("\n{} ", marker);

  let mut blocks = Vec::new();
  let mut pos = 0;

  while pos < input.len() {
    match block_at(input, pos, &open, &close, &next) {
      Some((heading, content, end)) => {
        blocks.push((heading, content));
        pos = end;
      }
      None => pos = next_boundary(input, pos),
    }
  }

  blocks
}

fn block_at<'a>(input: &'a str, pos: usize, open: &str, close: &str, next: &str) -> Option<(&'a str, &'a str, usize)> {
  let rest = &input[pos..];

  let mut starts = Vec::with_capacity(2);
  if pos == 0 && rest.starts_with(open) {
    starts.push(open.len());
  }
  if rest.starts_with('\n') && rest[1..].starts_with(open) {
    starts.push(pos + 1 + open.len());
  }

  starts.into_iter().find_map(|heading_start| {
    // Heading and content each need at least one character
    let heading_min = next_boundary(input, heading_start);
    if heading_min > input.len() {
      return None;
    }
    let heading_end = heading_min + input[heading_min..].find(close)?;
    let content_start = heading_end + close.len();
    if content_start >= input.len() {
      return None;
    }

    let content_min = next_boundary(input, content_start);
    let content_end = input[content_min..]
      .find(next)
      .map(|i| content_min + i)
      .unwrap_or(input.len());

    Some((
      &input[heading_start..heading_end],
      &input[content_start..content_end],
      content_end,
    ))
  })
}

/// Byte index of the character after the one at `pos` (`len + 1` past the end)
fn next_boundary(input: &str, pos: usize) -> usize {
  match input[pos..].chars().next() {
    Some(c) => pos + c.len_utf8(),
    None => input.len() + 1,
  }
}
