/// All addresses in these test constants were randomly generated for testing purposes.
/// This address should be used when a test needs a valid fungible or non-fungible resource
pub const DEFAULT_RESOURCE_ADDRESS: &str =
    "resource_sim1u3rh7qymnvr0dfnfs2aacpwuthee4a3yyg6y8py64y0h9sfy";
/// A second valid resource address, for tests that need two distinct resources
pub const SECONDARY_RESOURCE_ADDRESS: &str =
    "resource_sim1s5v0v8j70fq3pltvct4589s7dwvy9vuyxd49xa9x3uve9u7g";
/// Use this address in a circumstance that is testing a non-resource entity
pub const DEFAULT_ACCOUNT_ADDRESS: &str =
    "account_sim1a5879whc9v67hggmj7gl3889g5zc3q2dctn4sx5wagp23g6z";
/// The same payload as DEFAULT_RESOURCE_ADDRESS but encoded with the legacy bech32
/// checksum instead of bech32m.  Decodes under the legacy variant and must be rejected
pub const LEGACY_BECH32_RESOURCE_ADDRESS: &str =
    "resource_sim1u3rh7qymnvr0dfnfs2aacpwuthee4a3yyg6y8py64y6t4uvx";
/// A compressed secp256k1-sized public key payload (33 bytes of hex)
pub const DEFAULT_PUBLIC_KEY_HEX: &str =
    "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";
/// A 64-byte signature payload
pub const DEFAULT_SIGNATURE_HEX: &str =
    "bd15a5cbaa79b420cd0529b09a5f33c806d557d43626977bcd6f5d1c5e5f4a8e\
     1b2c3d4e5f60718293a4b5c6d7e8f9000112233445566778899aabbccddeeff0";
/// A 32-byte transaction hash payload
pub const DEFAULT_TRANSACTION_HASH_HEX: &str =
    "1dbb1f3e5a0c07d9f5b3f1a2c4e6d8fa0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e";
