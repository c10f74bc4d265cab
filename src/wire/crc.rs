//! CRC-32/ISO-HDLC checksum primitive.

/// Computes the CRC32 of `data`, continuing from `seed`.
///
/// Reflected polynomial `0xEDB88320`, initial register and final XOR of
/// all-ones. Chaining is exact: `crc32b(crc32b(0, a), b)` equals
/// `crc32b(0, ab)`, so callers may checksum data in arbitrary slices.
/// Exposed for callers that need to checksum foreign data with the same
/// variant the frame format uses.
pub fn crc32b(seed: u32, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(seed);
    hasher.update(data);
    hasher.finalize()
}
