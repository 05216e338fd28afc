//! Miette diagnostics for configuration files.
//!
//! A TOML parse failure is rendered with the offending file excerpt and a
//! label at the reported span.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(scoopbook::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse error, if it carries a span.
    #[must_use]
    pub fn from_toml(path: &Path, content: &str, err: &toml::de::Error) -> Option<Self> {
        let span = err.span()?;
        let len = span.end.saturating_sub(span.start).max(1);
        Some(
            Self::new(
                format!("invalid config: {}", err.message()),
                path.display().to_string(),
                content,
                span.start,
                len,
            )
            .with_help("see config.toml.example for the accepted sections"),
        )
    }
}

/// Re-read `path` and render a parse error as a miette report string.
///
/// Returns `None` when the file cannot be read or the error has no span.
#[must_use]
pub fn render_parse_error(path: &Path, err: &toml::de::Error) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let diagnostic = ConfigDiagnostic::from_toml(path, &content, err)?;
    Some(format!("{:?}", miette::Report::new(diagnostic)))
}
