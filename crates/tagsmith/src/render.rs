//! The load, lint and serialize pipeline.

use tagsmith_dom::{BuildMode, Diagnostic, lint};
use tagsmith_serializer::{SerializeError, SerializerConfig, serialize, serialize_all};
use thiserror::Error;

use crate::document::{DocumentSpec, LoadError};

/// Failure anywhere in [`render`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The tree could not be written.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Options for [`render`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Output format.
    pub serializer: SerializerConfig,
    /// Duplicate attribute policy while loading.
    pub mode: BuildMode,
    /// Run the advisory lint pass.
    pub lint: bool,
}

/// The output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The serialized document.
    pub html: String,
    /// Lint findings, empty unless requested.
    pub diagnostics: Vec<Diagnostic>,
}

/// Load a JSON document, optionally lint it, and serialize it.
///
/// Several roots are serialized in parallel and joined in order; the
/// doctype, if configured, is written once.
///
/// # Errors
///
/// Returns [`RenderError::Load`] if the document is rejected and
/// [`RenderError::Serialize`] if it exceeds the depth limit.
pub fn render(json: &str, options: &RenderOptions) -> Result<Rendered, RenderError> {
    let nodes = DocumentSpec::parse(json)?.into_nodes(options.mode)?;
    tracing::debug!(roots = nodes.len(), lint = options.lint, "rendering document");

    let diagnostics = if options.lint {
        nodes.iter().flat_map(lint).collect()
    } else {
        Vec::new()
    };
    let html = match nodes.as_slice() {
        [root] => serialize(root, &options.serializer)?,
        roots => serialize_all(roots, &options.serializer)?,
    };
    Ok(Rendered { html, diagnostics })
}
