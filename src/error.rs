use thiserror::Error;

/// Errors raised by the element host and the component registry.
///
/// Property reflection itself never fails; these cover the structural
/// operations around it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid custom element name: {0}")]
    InvalidName(String),

    #[error("Custom element already defined with a different type: {0}")]
    AlreadyDefined(String),

    #[error("Custom element not defined: {0}")]
    NotDefined(String),

    #[error("Cannot upgrade <{found}> as <{expected}>")]
    TagMismatch { expected: String, found: String },

    #[error("Element <{0}> already has a visual root")]
    ShadowRootExists(String),
}

pub type Result<T> = std::result::Result<T, Error>;
