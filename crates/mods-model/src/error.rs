use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{path}: more than one of value, structuredValue, groupedValue, parallelValue is set")]
    AmbiguousContent { path: String },
    #[error("{path}: valueAt must not be blank")]
    BlankReference { path: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
