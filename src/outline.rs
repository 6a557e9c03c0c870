use crate::blocks::Block;

/// Heading label excluded from category detection at any position.
pub const RESERVED_MARKER: &str = "Table of Contents";

/// Level-2 headings start categories; level-3 headings are question entries.
pub const CATEGORY_LEVEL: u8 = 2;
pub const QUESTION_LEVEL: u8 = 3;

/// Locate category boundaries: indices of level-2 heading-open nodes whose
/// immediate successor is a non-empty text node other than the reserved
/// "Table of Contents" marker. The result is strictly increasing and
/// partitions the sequence into per-category ranges; an empty result simply
/// means the document has no categories.
pub fn category_boundaries(blocks: &[Block]) -> Vec<usize> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, block)| {
            if !matches!(block, Block::HeadingOpen { level } if *level == CATEGORY_LEVEL) {
                return None;
            }
            match blocks.get(i + 1) {
                Some(Block::Text(name)) if !name.is_empty() && name != RESERVED_MARKER => Some(i),
                _ => None,
            }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn h2(name: &str) -> Vec<Block> {
        vec![
            Block::HeadingOpen { level: 2 },
            Block::Text(name.into()),
            Block::HeadingClose { level: 2 },
        ]
    }

    #[test]
    fn finds_each_category_heading() {
        let mut blocks = h2("General");
        blocks.extend(h2("Installation"));
        assert_eq!(category_boundaries(&blocks), vec![0, 3]);
    }

    #[test]
    fn boundary_at_index_zero_is_allowed() {
        let blocks = h2("General");
        assert_eq!(category_boundaries(&blocks), vec![0]);
    }

    #[test]
    fn table_of_contents_is_never_a_boundary() {
        let mut blocks = h2(RESERVED_MARKER);
        blocks.extend(h2("General"));
        blocks.extend(h2(RESERVED_MARKER));
        assert_eq!(category_boundaries(&blocks), vec![3]);
    }

    #[test]
    fn heading_without_name_text_is_skipped() {
        let blocks = vec![
            Block::HeadingOpen { level: 2 },
            Block::Other,
            Block::HeadingClose { level: 2 },
        ];
        assert!(category_boundaries(&blocks).is_empty());
    }

    #[test]
    fn level_three_headings_are_not_boundaries() {
        let blocks = vec![
            Block::HeadingOpen { level: 3 },
            Block::Text("1. What is this?".into()),
            Block::HeadingClose { level: 3 },
        ];
        assert!(category_boundaries(&blocks).is_empty());
    }

    #[test]
    fn no_headings_means_no_boundaries() {
        let blocks = vec![Block::Other, Block::Text("plain text".into()), Block::Other];
        assert!(category_boundaries(&blocks).is_empty());
    }
}
