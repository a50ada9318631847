use std::result;
use thiserror::Error;

/// Run-time failures. Name resolution never fails at run time; these come
/// from the erased [`Any`](crate::Any) container and from JSON rendering.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty value: expected `{expected}`")]
    EmptyValue { expected: &'static str },
    #[error("Type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;
