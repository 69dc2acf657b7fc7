// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Parses a hexadecimal string into bytes.
///
/// Whitespace and `:` separators are ignored so vectors can be pasted straight
/// from RFC text.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use tlsderive_test_utils::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("de:ad be ef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .chunks(2)
        .map(|pair| {
            let pair = core::str::from_utf8(pair).expect("Failed to read hex pair as utf-8");
            u8::from_str_radix(pair, 16).expect("Failed to parse hex pair")
        })
        .collect()
}

/// Lowercase hex encoding, for comparing output against hex known answers.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
