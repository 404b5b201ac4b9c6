//! Contains one module per schema type of the Core API wire format.

/// Defines the top-level authorization rule attached to a component method.
pub mod access_rule;
/// Defines the boolean composition tree a protected access rule evaluates.
pub mod access_rule_node;
pub mod dynamic_amount;
pub mod dynamic_count;
pub mod dynamic_resource_descriptor;
pub mod entity_reference;
pub mod fee_summary;
pub mod fixed_resource_descriptor;
/// Defines the transactions committed to the ledger, discriminated by their origin.
pub mod ledger_transaction;
pub mod notarized_transaction;
pub mod proof_rule;
pub mod public_key;
pub mod resource_amount;
pub mod round_update_transaction;
pub mod sbor_data;
pub mod schema_subpath;
pub mod signature;
/// Defines the state entries stored under ledger entities, discriminated by
/// `substate_type`.
pub mod substate;
pub mod transaction_header;
