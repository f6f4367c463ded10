// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{ErrorKind, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use lenext_attack::AttackContext;
use lenext_buffer::ByteBuffer;
use lenext_mac::{generate_mac, validate_mac};
use lenext_sha256::{ChainingValue, hash};

use crate::request::Request;

const READ_CHUNK_LEN: usize = 8 * 1024;

/// How a successfully executed request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status 0.
    Success,
    /// Validation found a different MAC. Exit status 1.
    Mismatch,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Mismatch => ExitCode::FAILURE,
        }
    }
}

/// Reads `input` to the end into a [`ByteBuffer`].
///
/// # Errors
///
/// Any read error other than [`ErrorKind::Interrupted`].
pub fn read_message<R: Read>(mut input: R) -> std::io::Result<ByteBuffer> {
    let mut message = ByteBuffer::new();
    let mut chunk = [0u8; READ_CHUNK_LEN];

    loop {
        match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => message.append(&chunk[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    chunk.fill(0);

    Ok(message)
}

/// Reads the whole message from `input`, executes `request` and writes the
/// result to `out`.
///
/// # Errors
///
/// I/O failures on either stream.
pub fn run<R: Read, W: Write>(request: &Request, input: R, mut out: W) -> anyhow::Result<Outcome> {
    let message = read_message(input).context("failed to read message from stdin")?;

    tracing::debug!(message_len = message.len(), "read message");

    let outcome = match request {
        Request::Checksum => {
            let digest = hash(message, 0, ChainingValue::initial());
            writeln!(out, "{digest}")?;
            Outcome::Success
        }
        Request::GenerateMac { key } => {
            let mac = generate_mac(key, message);
            writeln!(out, "{mac}")?;
            Outcome::Success
        }
        Request::ValidateMac { key, claimed } => {
            if validate_mac(key, message, claimed) {
                Outcome::Success
            } else {
                Outcome::Mismatch
            }
        }
        Request::Attack {
            leaked,
            key_len,
            suffix,
        } => {
            let forgery = AttackContext::new(*leaked, *key_len, &message, suffix)?.forge();

            writeln!(out, "{}", forgery.digest())?;
            forgery.write_escaped(&mut out)?;
            writeln!(out)?;
            Outcome::Success
        }
    };

    out.flush().context("failed to write to stdout")?;

    Ok(outcome)
}
