//! tests/common.rs
//! Common constants shared across test files

/// Well-known key used by deterministic scenarios across test files.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

/// A second, unrelated key for wrong-key scenarios.
#[allow(dead_code)] // Used across multiple test files
pub const OTHER_KEY_HEX: &str = "ffeeddccbbaa99887766554433221100";

/// Common test data used across multiple tests.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

/// Plaintext sizes that exercise the padding edge cases: empty, sub-block,
/// exactly one block, just over, and a large buffer.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SIZES: &[usize] = &[0, 1, 5, 15, 16, 17, 1000];
