// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::ffi::OsString;

use lenext_buffer::ByteBuffer;
use lenext_sha256::Digest;

use crate::cli::Cli;
use crate::error::UsageError;

/// A validated command.
///
/// Digests are parsed here, before any input is read.
#[derive(Debug)]
pub enum Request {
    /// Print `SHA-256(message)`.
    Checksum,
    /// Print `SHA-256(key ‖ message)`.
    GenerateMac {
        /// Secret key.
        key: ByteBuffer,
    },
    /// Compare `SHA-256(key ‖ message)` with `claimed`.
    ValidateMac {
        /// Secret key.
        key: ByteBuffer,
        /// MAC to check.
        claimed: Digest,
    },
    /// Forge a MAC for `message ‖ glue ‖ suffix`.
    Attack {
        /// MAC of `key ‖ message`.
        leaked: Digest,
        /// Assumed key length in bytes.
        key_len: usize,
        /// Bytes to append.
        suffix: ByteBuffer,
    },
}

impl TryFrom<Cli> for Request {
    type Error = UsageError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.checksum {
            return Ok(Self::Checksum);
        }

        if cli.sign {
            return Ok(Self::GenerateMac {
                key: secret_key(cli.key)?,
            });
        }

        if cli.validate {
            let claimed = parse_mac(cli.mac.as_deref())?;

            return Ok(Self::ValidateMac {
                key: secret_key(cli.key)?,
                claimed,
            });
        }

        if cli.extend {
            let leaked = parse_mac(cli.mac.as_deref())?;
            let key_len = cli.key_len.ok_or(UsageError::MissingArgument("-n"))?;
            let key_len =
                usize::try_from(key_len).map_err(|_| UsageError::KeyLengthOutOfRange(key_len))?;
            let suffix = cli.suffix.ok_or(UsageError::MissingArgument("-a"))?;

            return Ok(Self::Attack {
                leaked,
                key_len,
                suffix: ByteBuffer::from(suffix.into_encoded_bytes()),
            });
        }

        Err(UsageError::MissingMode)
    }
}

fn secret_key(key: Option<OsString>) -> Result<ByteBuffer, UsageError> {
    let key = key.ok_or(UsageError::MissingArgument("-k"))?;
    Ok(ByteBuffer::from(key.into_encoded_bytes()))
}

fn parse_mac(mac: Option<&str>) -> Result<Digest, UsageError> {
    let mac = mac.ok_or(UsageError::MissingArgument("-m"))?;
    Ok(Digest::from_hex(mac)?)
}
