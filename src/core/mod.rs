//! Contains the codec machinery and all schema-derived model types.

/// Defines the json object decode/encode helpers and the [ModelType](self::codec::ModelType)
/// trait implemented by every schema type.
pub mod codec;
/// Defines all errors a decode can surface to the caller.
pub mod error;
/// Defines the discriminator lookup table used to pick the concrete variant of a
/// polymorphic schema family.
pub mod registry;
pub mod types;
