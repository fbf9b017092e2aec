use thiserror::Error;

/// Errors that can occur while applying a feed extension
#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("item at {index}: must contain an enclosure")]
    MissingEnclosure { index: usize },
}

/// Errors that can occur while writing the markup tree out as XML
#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("Failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Generated document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Top-level errors for feed rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{name}: {source}")]
    Extension {
        name: &'static str,
        #[source]
        source: ExtensionError,
    },

    #[error("Failed to serialize feed: {0}")]
    Serialize(#[from] SerializeError),
}
