use thiserror::Error;

/// All the ways things can go wrong around the pickers
///
/// The pickers themselves never fail: every transition is total over the
/// built-in data. What's left is the plumbing around them (config files,
/// resolving names typed on the command line, and whatever the item search
/// side reports back when we hand it a selection).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No filter named '{segment}' under {parent}")]
    UnknownNode { segment: String, parent: String },

    #[error("'{0}' is not a selectable leaf")]
    NotSelectable(String),

    #[error("Item search rejected the selection: {0}")]
    Collaborator(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
