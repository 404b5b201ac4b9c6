/// The discriminator property name carried by most polymorphic schema families.
pub const TYPE_FIELD: &str = "type";
/// The discriminator property name of the substate family.
pub const SUBSTATE_TYPE_FIELD: &str = "substate_type";
/// The discriminator property name of the public key and signature families.
pub const KEY_TYPE_FIELD: &str = "key_type";
/// The discriminator property name of the resource amount family.
pub const RESOURCE_TYPE_FIELD: &str = "resource_type";

/// The documented upper bound for epoch values.  This bound is advisory only and is never
/// enforced during a decode; values above it are accepted.
pub const MAX_DOCUMENTED_EPOCH: u64 = 10_000_000_000;

/// The bech32m prefix family carried by resource addresses.
pub const RESOURCE_ADDRESS_PREFIX: &str = "resource";
