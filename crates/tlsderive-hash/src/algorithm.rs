// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use crate::context::HashContext;
use crate::descriptor::AlgorithmDescriptor;
use crate::error::HashError;
use crate::traits::HashFunction;

const SHA256: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "sha256",
    output_len: 32,
    block_len: 64,
};

const SHA384: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "sha384",
    output_len: 48,
    block_len: 128,
};

const SHA512: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "sha512",
    output_len: 64,
    block_len: 128,
};

const SHA1: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "sha1",
    output_len: 20,
    block_len: 64,
};

const MD5: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "md5",
    output_len: 16,
    block_len: 64,
};

/// Supported digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    #[default]
    Sha256,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA-512 (FIPS 180-4)
    Sha512,
    /// SHA-1, legacy (TLS 1.0/1.1 era and RFC 6070 vectors)
    Sha1,
    /// MD5, legacy
    Md5,
}

impl HashAlgorithm {
    /// Every supported digest, in name-grammar order.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha1,
        HashAlgorithm::Md5,
    ];

    /// Static descriptor of this digest.
    pub const fn descriptor(self) -> AlgorithmDescriptor {
        match self {
            HashAlgorithm::Sha256 => SHA256,
            HashAlgorithm::Sha384 => SHA384,
            HashAlgorithm::Sha512 => SHA512,
            HashAlgorithm::Sha1 => SHA1,
            HashAlgorithm::Md5 => MD5,
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Digest output length in bytes.
    pub const fn output_len(self) -> usize {
        self.descriptor().output_len
    }

    /// Compression block length in bytes.
    pub const fn block_len(self) -> usize {
        self.descriptor().block_len
    }
}

impl HashFunction for HashAlgorithm {
    fn descriptor(&self) -> AlgorithmDescriptor {
        HashAlgorithm::descriptor(*self)
    }

    fn context(&self) -> HashContext {
        let inner: Box<dyn digest::DynDigest + Send> = match self {
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha384 => Box::new(sha2::Sha384::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
        };
        HashContext::new(inner)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_owned()))
    }
}
