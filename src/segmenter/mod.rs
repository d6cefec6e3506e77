//! Block-level segmentation of generated article HTML.
//!
//! The upstream generator emits a small, fixed tag vocabulary, so top-level
//! blocks are found with non-overlapping regex matches instead of a DOM parse.
//! Every byte of the input stays accounted for: segments keep their source
//! span and the text between segments is re-emitted verbatim by
//! [`Segmentation::render`].

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::utils::strip_tags;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<h[1-6](?:\s[^>]*)?>.*?</h[1-6]\s*>|<p(?:\s[^>]*)?>.*?</p\s*>|<ul(?:\s[^>]*)?>.*?</ul\s*>|<ol(?:\s[^>]*)?>.*?</ol\s*>|<div(?:\s[^>]*)?>.*?</div\s*>",
    )
    .expect("BLOCK_RE: hardcoded regex is valid")
});

static HEADING_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<h[1-6](?:\s|>|/)").expect("HEADING_START_RE: hardcoded regex is valid")
});

/// Headings nested inside a linkable block (e.g. a `<div>` wrapping an `<h3>`).
/// A heading that is never closed runs to the end of the block.
pub(crate) static NESTED_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[1-6](?:\s[^>]*)?>(?:.*?</h[1-6]\s*>|.*$)")
        .expect("NESTED_HEADING_RE: hardcoded regex is valid")
});

pub(crate) static ANCHOR_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a(?:\s[^>]*)?>.*?</a\s*>").expect("ANCHOR_ELEMENT_RE: hardcoded regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// `<h1>`..`<h6>`; never receives links
    Heading,
    /// Paragraphs, lists, divs and stray text
    Linkable,
}

/// One block-level chunk of the article.
#[derive(Debug, Clone)]
pub struct ContentSegment {
    pub index: usize,
    pub kind: SegmentKind,
    pub raw_markup: String,
    /// Byte range of `raw_markup` in the source document
    pub span: Range<usize>,
    /// Stray text outside any recognised block, treated as a paragraph
    pub synthetic: bool,
}

impl ContentSegment {
    pub fn is_heading(&self) -> bool {
        self.kind == SegmentKind::Heading
    }

    /// Tag-stripped text, excluding any nested heading content
    pub fn text(&self) -> String {
        strip_tags(&NESTED_HEADING_RE.replace_all(&self.raw_markup, " "))
    }

    /// Text that can still become anchor text: nested headings and the
    /// content of existing links are removed.
    pub fn eligible_text(&self) -> String {
        let without_headings = NESTED_HEADING_RE.replace_all(&self.raw_markup, " ");
        strip_tags(&ANCHOR_ELEMENT_RE.replace_all(&without_headings, " "))
    }
}

/// Ordered segments plus the source they were cut from.
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    source: &'a str,
    segments: Vec<ContentSegment>,
}

impl<'a> Segmentation<'a> {
    pub fn segments(&self) -> &[ContentSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn linkable(&self) -> impl Iterator<Item = &ContentSegment> {
        self.segments.iter().filter(|s| !s.is_heading())
    }

    /// Rejoin the document, substituting `replacement(segment)` for segments
    /// that were rewritten. Text between segments is copied unchanged.
    pub fn render<F>(&self, mut replacement: F) -> String
    where
        F: FnMut(&ContentSegment) -> Option<String>,
    {
        let mut out = String::with_capacity(self.source.len() + 256);
        let mut cursor = 0;

        for segment in &self.segments {
            out.push_str(&self.source[cursor..segment.span.start]);
            match replacement(segment) {
                Some(markup) => out.push_str(&markup),
                None => out.push_str(&segment.raw_markup),
            }
            cursor = segment.span.end;
        }
        out.push_str(&self.source[cursor..]);

        out
    }
}

/// Split `html` into ordered heading / linkable segments.
///
/// Malformed markup never fails: anything outside a recognised block becomes a
/// synthetic paragraph, and whitespace-only gaps are dropped.
pub fn segment(html: &str) -> Segmentation<'_> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    let push_stray = |segments: &mut Vec<ContentSegment>, range: Range<usize>| {
        let fragment = &html[range.clone()];
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            return;
        }
        let offset = range.start + (fragment.len() - fragment.trim_start().len());
        let kind = if HEADING_START_RE.is_match(trimmed) {
            SegmentKind::Heading
        } else {
            SegmentKind::Linkable
        };
        segments.push(ContentSegment {
            index: segments.len(),
            kind,
            raw_markup: trimmed.to_string(),
            span: offset..offset + trimmed.len(),
            synthetic: true,
        });
    };

    for m in BLOCK_RE.find_iter(html) {
        push_stray(&mut segments, cursor..m.start());

        let kind = if HEADING_START_RE.is_match(m.as_str()) {
            SegmentKind::Heading
        } else {
            SegmentKind::Linkable
        };
        segments.push(ContentSegment {
            index: segments.len(),
            kind,
            raw_markup: m.as_str().to_string(),
            span: m.range(),
            synthetic: false,
        });
        cursor = m.end();
    }
    push_stray(&mut segments, cursor..html.len());

    Segmentation {
        source: html,
        segments,
    }
}
