//! Configuration errors raised while assembling a specification tree
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    UnterminatedPlaceholder {
        span: Span,
    },
    InvalidPlaceholder {
        text: String,
        span: Span,
    },
    UnmatchedBrace {
        span: Span,
    },
    MissingGroup {
        index: usize,
        groups: usize,
        span: Span,
    },
    UnusedGroup {
        index: usize,
    },
}

impl TemplateError {
    /// The offending part of the template, if the error points at one
    pub fn span(&self) -> Option<Span> {
        match self {
            TemplateError::UnterminatedPlaceholder { span } => Some(*span),
            TemplateError::InvalidPlaceholder { span, .. } => Some(*span),
            TemplateError::UnmatchedBrace { span } => Some(*span),
            TemplateError::MissingGroup { span, .. } => Some(*span),
            TemplateError::UnusedGroup { .. } => None,
        }
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::UnterminatedPlaceholder { span } => {
                write!(f, "Unterminated placeholder at byte {}", span.start)
            }
            TemplateError::InvalidPlaceholder { text, span } => {
                write!(
                    f,
                    "Placeholder '{{{}}}' at byte {} is not a group index",
                    text, span.start
                )
            }
            TemplateError::UnmatchedBrace { span } => {
                write!(f, "Unmatched '}}' at byte {}", span.start)
            }
            TemplateError::MissingGroup {
                index,
                groups,
                span,
            } => {
                write!(
                    f,
                    "Placeholder {{{}}} at byte {} has no group ({} given)",
                    index, span.start, groups
                )
            }
            TemplateError::UnusedGroup { index } => {
                write!(f, "Group {} is never referenced by the template", index)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    EmptySelect,
    EmptyWeights,
    InvalidWeight { value: f64 },
    ZeroCount,
    InvalidRange { min: i64, max: i64 },
    Template {
        template: String,
        error: TemplateError,
    },
    SubsetTooSmall { len: usize },
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecError::EmptySelect => write!(f, "Select needs at least one child"),
            SpecError::EmptyWeights => write!(f, "Weight sequence is empty"),
            SpecError::InvalidWeight { value } => {
                write!(f, "Invalid weight {}: weights must be finite and positive", value)
            }
            SpecError::ZeroCount => write!(f, "OnlyN count must be at least 1"),
            SpecError::InvalidRange { min, max } => {
                write!(f, "Invalid range: min {} is greater than max {}", min, max)
            }
            SpecError::Template { template, error } => {
                write!(f, "Invalid template {:?}: {}", template, error)
            }
            SpecError::SubsetTooSmall { len } => {
                write!(f, "Subset needs at least 3 items, got {}", len)
            }
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::Template { error, .. } => Some(error),
            _ => None,
        }
    }
}
