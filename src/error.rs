use thiserror::Error;

/// Per-entry extraction failures. Extraction is fail-soft: a failing entry is
/// skipped and its error reported on `Extraction::warnings` while the rest of
/// the document still extracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The question heading text does not start with `<digits>. `.
    #[error("question heading {heading:?} has no leading \"<number>. \" prefix")]
    MalformedNumberPrefix { heading: String },

    /// The node after a question heading-open is not a text node.
    #[error("no text follows the question heading at block {index}")]
    MissingQuestionText { index: usize },

    /// No text node was found between the question heading and the next
    /// heading of any level.
    #[error("no answer paragraph found for question {question:?}")]
    MissingAnswer { question: String },
}
