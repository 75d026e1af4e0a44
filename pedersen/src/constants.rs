//! Parameters of the Pedersen hash.

/// Number of fixed base generators in the standard table.
pub const NUM_GENERATORS: usize = 5;

/// Triples absorbed against one generator before moving to the next.
///
/// 62 triples advance the running multiplier by 16^62 = 2^248, which keeps
/// every chunk scalar below the subgroup order.
pub const CHUNK_TRIPLES: usize = 62;

/// Number of byte-sized windows per generator, one per byte of a 32-byte
/// scalar encoding.
pub const NUM_WINDOWS: usize = 32;

/// Entries per window, one per byte value.
pub const WINDOW_SIZE: usize = 256;

/// Maximum number of triples the standard table can absorb.
pub const MAX_TRIPLES: usize = NUM_GENERATORS * CHUNK_TRIPLES;

/// Maximum padded bit length the standard table can absorb.
pub const MAX_BITS: usize = MAX_TRIPLES * 3;

/// Longest byte input the standard table accepts.
pub const MAX_INPUT_LEN: usize = MAX_BITS / 8;

/// Size of an encoded digest: two 32-byte big-endian coordinates.
pub const DIGEST_SIZE: usize = 64;

/// Affine coordinates (x, y) of the standard generators, big-endian hex.
pub(crate) const GENERATOR_COORDINATES: [(&str, &str); NUM_GENERATORS] = [
    (
        "184570ed4909a81b2793320a26e8f956be129e4eed381acf901718dff8802135",
        "1c3a9a830f61587101ef8cbbebf55063c1c6480e7e5a7441eac7f626d8f69a45",
    ),
    (
        "0afc00ffa0065f5479f53575e86f6dcd0d88d7331eefd39df037eea2d6f031e4",
        "237a6734dd50e044b4f44027ee9e70fcd2e5724ded1d1c12b820a11afdc15c7a",
    ),
    (
        "00fb62ad05ee0e615f935c5a83a870f389a5ea2baccf22ad731a4929e7a75b37",
        "00bc8b1c9d376ceeea2cf66a91b7e2ad20ab8cce38575ac13dbefe2be548f702",
    ),
    (
        "0675544aa0a708b0c584833fdedda8d89be14c516e0a7ef3042f378cb01f6e48",
        "169025a530508ee4f1d34b73b4d32e008b97da2147f15af3c53f405cf44f89d4",
    ),
    (
        "07350a0660a05014168047155c0a0647ea2720ecb182a6cb137b29f8a5cfd37f",
        "3004ad73b7abe27f17ec04b04b450955a4189dd012b4cf4b174af15bd412696a",
    ),
];
