use crate::parsing::blocks::BlockKind;

/// Error type returned by external collaborators (front matter, highlighter, tags).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("block {position}: render hook changed block kind from {expected} to {found}")]
    KindChanged {
        position: usize,
        expected: BlockKind,
        found: BlockKind,
    },
    #[error("block {position}: failed to highlight `{language}` code: {source}")]
    Highlight {
        position: usize,
        language: String,
        #[source]
        source: BoxError,
    },
    #[error("block {position}: tag `{name}` failed to render: {source}")]
    Tag {
        position: usize,
        name: String,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to parse front matter: {0}")]
    FrontMatter(#[source] BoxError),
}
