use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// One node of the parsed document. The sequence is flat and ordered;
/// position encodes document structure and is never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    HeadingOpen { level: u8 },
    HeadingClose { level: u8 },
    Text(String),
    Other,
}

/// Flatten markdown into a `Block` sequence.
///
/// Heading and paragraph detection is delegated to pulldown-cmark; this
/// adapter only maps its event stream onto the four block kinds. Inline
/// markup (emphasis, links, code spans) is dissolved so that each heading
/// and each paragraph contributes a single coalesced `Text` node.
pub fn tokenize(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                blocks.push(Block::HeadingOpen { level: level as u8 });
            }
            Event::End(TagEnd::Heading(level)) => {
                blocks.push(Block::HeadingClose { level: level as u8 });
            }

            // Inline containers are dissolved so adjacent text fragments
            // coalesce into one node.
            Event::Start(
                Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. },
            )
            | Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image,
            ) => {}

            Event::Text(t) => push_text(&mut blocks, &t),
            Event::Code(c) => push_text(&mut blocks, &c),
            Event::SoftBreak | Event::HardBreak => {
                if let Some(Block::Text(t)) = blocks.last_mut() {
                    t.push(' ');
                }
            }
            Event::InlineHtml(_) | Event::FootnoteReference(_) | Event::TaskListMarker(_) => {}

            // Structural nodes we do not care about (paragraph and list
            // delimiters, code blocks, rules, ...)
            _ => blocks.push(Block::Other),
        }
    }

    blocks
}

fn push_text(blocks: &mut Vec<Block>, s: &str) {
    if let Some(Block::Text(t)) = blocks.last_mut() {
        t.push_str(s);
    } else {
        blocks.push(Block::Text(s.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_emits_open_text_close() {
        let blocks = tokenize("## General");
        assert_eq!(
            blocks,
            vec![
                Block::HeadingOpen { level: 2 },
                Block::Text("General".into()),
                Block::HeadingClose { level: 2 },
            ]
        );
    }

    #[test]
    fn paragraph_text_between_other_nodes() {
        let blocks = tokenize("Some answer text.");
        assert_eq!(
            blocks,
            vec![Block::Other, Block::Text("Some answer text.".into()), Block::Other]
        );
    }

    #[test]
    fn inline_markup_coalesces_into_one_text_node() {
        let blocks = tokenize("### 1. What *is* `this`?");
        assert!(matches!(&blocks[1], Block::Text(t) if t == "1. What is this?"));
        assert!(matches!(&blocks[2], Block::HeadingClose { level: 3 }));
    }

    #[test]
    fn soft_breaks_join_with_a_space() {
        let blocks = tokenize("first line\nsecond line");
        assert!(matches!(&blocks[1], Block::Text(t) if t == "first line second line"));
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn heading_followed_by_paragraph() {
        let blocks = tokenize("### 1. What is this?\n\nAn example.");
        assert_eq!(
            blocks,
            vec![
                Block::HeadingOpen { level: 3 },
                Block::Text("1. What is this?".into()),
                Block::HeadingClose { level: 3 },
                Block::Other,
                Block::Text("An example.".into()),
                Block::Other,
            ]
        );
    }
}
