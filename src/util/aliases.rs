use crate::core::error::ModelError;

/// All codec pathways with exceptional code should return a result that has a model error
/// as its resulting error type.
pub type ModelResult<T> = Result<T, ModelError>;
