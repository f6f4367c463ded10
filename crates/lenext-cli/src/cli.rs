// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::ffi::OsString;

use clap::{ArgGroup, Parser};

/// SHA-256 checksums, prefix MACs and length-extension forgeries.
///
/// The message is always read from standard input.
#[derive(Debug, Parser)]
#[command(name = "lenext", version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["checksum", "sign", "validate", "extend"]),
))]
pub struct Cli {
    /// Print the SHA-256 digest of the message.
    #[arg(short = 'c', long)]
    pub checksum: bool,

    /// Print the MAC of the message under KEY.
    #[arg(short = 's', long, requires = "key")]
    pub sign: bool,

    /// Check the MAC given with -m; exits 1 on mismatch.
    #[arg(short = 'v', long, requires_all = ["key", "mac"])]
    pub validate: bool,

    /// Forge a MAC for message ‖ padding ‖ suffix from the MAC given with -m.
    #[arg(short = 'e', long, requires_all = ["mac", "key_len", "suffix"])]
    pub extend: bool,

    /// Secret key. Taken as raw bytes, need not be UTF-8.
    #[arg(short = 'k', long, value_name = "KEY")]
    pub key: Option<OsString>,

    /// Claimed or leaked MAC, 64 hex characters.
    #[arg(short = 'm', long, value_name = "CHS")]
    pub mac: Option<String>,

    /// Assumed length of the secret key in bytes.
    #[arg(
        short = 'n',
        long,
        value_name = "NUM",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub key_len: Option<u64>,

    /// Suffix to append to the forged message. Taken as raw bytes.
    #[arg(short = 'a', long = "append", value_name = "MSG")]
    pub suffix: Option<OsString>,
}
