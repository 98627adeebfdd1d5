use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of a raw RGBA frame.
///
/// Rendering in this codebase is deterministic, so two runs of the same
/// scene must produce byte-identical frames; golden-frame tests compare
/// digests instead of lugging whole buffers around.
pub fn frame_sha256_hex(frame: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(frame);
    hex::encode(hasher.finalize())
}
