//! Miscellaneous functionalities that do not logically belong to a concrete group.

/// Defines various types with type aliases to shorten syntax used elsewhere in the crate.
pub mod aliases;
/// Defines all global constant values used throughout the crate.
pub mod constants;
/// Lexical validation for the attos decimal strings carried by amount fields.
pub mod decimal_utils;
/// Lexical validation and decoding for hex-encoded binary payload fields.
pub mod hex_utils;
/// Utility functions for validating the bech32m addresses carried by address fields.
pub mod address_utils;
/// Global traits to be used across various areas of the crate.
pub mod traits;
