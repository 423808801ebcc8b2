use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    offset: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            offset: None,
        }
    }

    /// Attaches the document byte offset the error refers to.
    pub fn at(error_impl: ErrorImpl, offset: usize) -> Self {
        Error {
            internal_error: error_impl,
            offset: Some(offset),
        }
    }

    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedExtension { .. } => "UnsupportedExtension",
            ErrorImpl::MissingExtension { .. } => "MissingExtension",
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::WindowOutOfBounds { .. } => "WindowOutOfBounds",
            ErrorImpl::WindowNotOnCharBoundary { .. } => "WindowNotOnCharBoundary",
            ErrorImpl::InvalidWorkerCount => "InvalidWorkerCount",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedExtension { extension } => ErrorTip::Suggestion(format!(
                "`.{}` files are not bmake files, expected `.mke` or `.mki`",
                extension
            )),
            ErrorImpl::MissingExtension { .. } => {
                ErrorTip::Suggestion(String::from("bmake files end in `.mke` or `.mki`"))
            }
            ErrorImpl::FileRead { .. } => ErrorTip::None,
            ErrorImpl::WindowOutOfBounds { len, .. } => ErrorTip::Suggestion(format!(
                "The document is {} bytes long",
                len
            )),
            ErrorImpl::WindowNotOnCharBoundary { offset } => ErrorTip::Suggestion(format!(
                "Byte {} is inside a multi-byte character",
                offset
            )),
            ErrorImpl::InvalidWorkerCount => {
                ErrorTip::Suggestion(String::from("Use at least one worker"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unsupported file extension: {extension:?}")]
    UnsupportedExtension { extension: String },
    #[error("file has no extension: {path:?}")]
    MissingExtension { path: String },
    #[error("failed to read {path:?}: {message}")]
    FileRead { path: String, message: String },
    #[error("window {start}..{end} is outside a document of {len} bytes")]
    WindowOutOfBounds { start: usize, end: usize, len: usize },
    #[error("window boundary {offset} is not on a character boundary")]
    WindowNotOnCharBoundary { offset: usize },
    #[error("worker count must be at least one")]
    InvalidWorkerCount,
}
