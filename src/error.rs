//! Error types for loading scenes

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading or validating a scene file
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate node id '{id}'")]
    DuplicateId { id: String },
}

impl SceneError {
    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            SceneError::Parse(e) => e.span(),
            SceneError::Io(_) | SceneError::DuplicateId { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (Some(span), SceneError::Parse(e)) = (self.span(), self) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid scene")
            .with_label(
                Label::new((filename, span))
                    .with_message(e.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
