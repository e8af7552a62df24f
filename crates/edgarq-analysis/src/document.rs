//! HTML filing parsing: tag stripping and header-delimited sections

use edgarq_domain::text;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// Section title -> section body, in document order
pub type Sections = IndexMap<String, String>;

lazy_static! {
    static ref SCRIPT_REGEX: Regex = Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap();
    static ref STYLE_REGEX: Regex = Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap();
    static ref BLOCK_TAG_REGEX: Regex = Regex::new(
        r"(?i)</?(?:address|article|aside|blockquote|body|br|caption|dd|div|dl|dt|footer|h[1-6]|head|header|hr|html|li|main|nav|ol|p|pre|section|table|tbody|td|tfoot|th|thead|title|tr|ul)\b[^>]*>",
    )
    .unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref NUMERIC_ENTITY_REGEX: Regex = Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").unwrap();

    // One pattern per level; the regex crate has no backreferences to tie
    // the closing tag to the opening one.
    static ref HEADER_REGEXES: Vec<Regex> = (1..=6)
        .map(|level| {
            Regex::new(&format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}\s*>")).unwrap()
        })
        .collect();
}

/// A parsed filing document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Header-delimited sections
    pub sections: Sections,

    /// Full text with tags removed and whitespace collapsed
    pub text: String,

    /// Leading slice of `text`
    pub summary: String,
}

/// Parses filing HTML into plain text and sections
#[derive(Debug, Clone)]
pub struct DocumentParser {
    summary_chars: usize,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl DocumentParser {
    /// Create a parser that keeps `summary_chars` characters of summary
    pub fn new(summary_chars: usize) -> Self {
        Self { summary_chars }
    }

    /// Parse an HTML document
    pub fn parse(&self, html: &str) -> ParsedDocument {
        let text = strip_tags(html);
        let summary = text::truncate_chars(&text, self.summary_chars).to_string();
        let sections = extract_sections(html);

        debug!(
            sections = sections.len(),
            text_len = text.len(),
            "parsed document"
        );

        ParsedDocument {
            sections,
            text,
            summary,
        }
    }
}

/// Remove markup and return whitespace-normalized text
///
/// Script and style blocks are dropped with their contents. Block-level tags
/// become a space so adjacent cells don't run together; inline tags vanish
/// so `Reve<b>nue</b>` still reads as one word.
pub fn strip_tags(html: &str) -> String {
    let without_scripts = SCRIPT_REGEX.replace_all(html, " ");
    let without_styles = STYLE_REGEX.replace_all(&without_scripts, " ");
    let without_blocks = BLOCK_TAG_REGEX.replace_all(&without_styles, " ");
    let without_tags = TAG_REGEX.replace_all(&without_blocks, "");
    text::collapse_whitespace(&decode_entities(&without_tags))
}

fn decode_entities(input: &str) -> String {
    let numeric = NUMERIC_ENTITY_REGEX.replace_all(input, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            _ => None,
        };
        code.and_then(char::from_u32)
            .map(|c| if c == '\u{a0}' { ' ' } else { c })
            .map(String::from)
            .unwrap_or_default()
    });

    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

struct Header {
    start: usize,
    end: usize,
    title: String,
}

/// Split a document at its `<h1>`..`<h6>` elements
///
/// Each body runs from the end of its header's closing tag to the start of
/// the next header (or the end of the document). A repeated title keeps its
/// first position and takes the later body.
pub fn extract_sections(html: &str) -> Sections {
    let mut headers: Vec<Header> = HEADER_REGEXES
        .iter()
        .flat_map(|re| re.captures_iter(html))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Header {
                start: whole.start(),
                end: whole.end(),
                title: strip_tags(inner.as_str()),
            })
        })
        .collect();
    headers.sort_by_key(|h| h.start);

    let mut sections = Sections::new();
    for (i, header) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map_or(html.len(), |next| next.start)
            .max(header.end);
        let body = strip_tags(&html[header.end..body_end]);
        sections.insert(header.title.clone(), body);
    }
    sections
}
