use qdesk_core::declaration::DeclarationError;
use qdesk_remote::{ClientConfigError, RemoteApiError};

#[derive(thiserror::Error, Debug)]
pub enum QdeskCliError {
    #[error(transparent)]
    Config(#[from] ClientConfigError),
    #[error(transparent)]
    Remote(#[from] RemoteApiError),
    #[error("declaration rejected: {0}")]
    Declaration(#[from] DeclarationError),
    #[error("arrival board refresh failed: {0}")]
    RefreshFailed(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failure reading declaration file {path}: {message}")]
    DraftFileError { path: String, message: String },
    #[error("failure encoding json: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("failure creating async runtime: {0}")]
    RuntimeError(String),
}
