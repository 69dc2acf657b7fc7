// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::KdfError;

/// Output ceiling for a hash with `hash_len`-byte digests.
pub(crate) const fn max_output_len(hash_len: usize) -> usize {
    255 * hash_len
}

/// Rejects `0` and anything above [`max_output_len`].
pub(crate) fn check_output_len(requested: usize, hash_len: usize) -> Result<(), KdfError> {
    let max = max_output_len(hash_len);
    if requested == 0 || requested > max {
        tracing::debug!(requested, max, "rejected derivation length");
        return Err(KdfError::InvalidOutputLength { requested, max });
    }
    Ok(())
}
