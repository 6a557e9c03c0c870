use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::blocks::{tokenize, Block};
use crate::error::ExtractError;
use crate::outline::{category_boundaries, QUESTION_LEVEL};

static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\. ").unwrap());

/// One numbered question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub number: u32,
    pub question: String,
    pub answer: String,
}

/// A category heading with its entries, in document order (never sorted by
/// entry number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub items: Vec<Entry>,
}

/// The output contract: `{ "data": [ { "category", "items" }, ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub data: Vec<Category>,
}

/// Extraction result plus the warnings produced by skipped entries.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub faq: Faq,
    pub warnings: Vec<ExtractError>,
}

/// Two-pass pipeline: markdown → blocks → categories with entries.
pub fn extract(markdown: &str) -> Extraction {
    extract_from_blocks(&tokenize(markdown))
}

/// Extract from an already-built block sequence.
///
/// Single forward pass: a cursor tracks the nearest category boundary at or
/// before the current index, so each level-3 heading is assigned to the
/// enclosing category range. Level-3 headings before the first boundary
/// belong to no category and are dropped; the last category absorbs every
/// trailing question through the end of the sequence.
pub fn extract_from_blocks(blocks: &[Block]) -> Extraction {
    let boundaries = category_boundaries(blocks);
    let mut warnings = Vec::new();

    let mut categories: Vec<Category> = boundaries
        .iter()
        .filter_map(|&b| match blocks.get(b + 1) {
            Some(Block::Text(name)) => Some(Category {
                category: name.clone(),
                items: Vec::new(),
            }),
            _ => None,
        })
        .collect();

    let mut cursor: Option<usize> = None;
    for (i, block) in blocks.iter().enumerate() {
        // Advance to the boundary range containing index i.
        while boundaries
            .get(cursor.map_or(0, |c| c + 1))
            .is_some_and(|&b| b <= i)
        {
            cursor = Some(cursor.map_or(0, |c| c + 1));
        }

        if !matches!(block, Block::HeadingOpen { level } if *level == QUESTION_LEVEL) {
            continue;
        }
        // Orphan question: no boundary precedes it.
        let Some(cur) = cursor else { continue };

        match read_entry(blocks, i) {
            Ok(entry) => categories[cur].items.push(entry),
            Err(err) => {
                tracing::warn!(block = i, "skipping entry: {err}");
                warnings.push(err);
            }
        }
    }

    Extraction {
        faq: Faq { data: categories },
        warnings,
    }
}

/// Read the `{number, question, answer}` fields for the question heading-open
/// at `heading`.
fn read_entry(blocks: &[Block], heading: usize) -> Result<Entry, ExtractError> {
    let raw = match blocks.get(heading + 1) {
        Some(Block::Text(t)) => t.as_str(),
        _ => return Err(ExtractError::MissingQuestionText { index: heading }),
    };

    let caps = NUMBER_PREFIX_RE
        .captures(raw)
        .ok_or_else(|| ExtractError::MalformedNumberPrefix { heading: raw.to_string() })?;
    let number: u32 = caps[1]
        .parse()
        .map_err(|_| ExtractError::MalformedNumberPrefix { heading: raw.to_string() })?;
    let question = raw[caps[0].len()..].to_string();

    // The answer is the first text node after this heading's close, stopping
    // at the next heading of any level. A structural walk rather than a fixed
    // offset, so extra inline nodes inside the question cannot shift it.
    let mut past_close = false;
    for block in &blocks[heading + 1..] {
        match block {
            Block::HeadingClose { level } if *level == QUESTION_LEVEL && !past_close => {
                past_close = true;
            }
            Block::HeadingOpen { .. } => break,
            Block::Text(t) if past_close => {
                return Ok(Entry {
                    number,
                    question,
                    answer: t.clone(),
                });
            }
            _ => {}
        }
    }

    Err(ExtractError::MissingAnswer { question })
}

// ── Tests ──
