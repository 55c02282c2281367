// File:    base32.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: Base32 codec for shared secrets, with RFC 4648 padding and a deliberately lenient decoder.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the Base32 codec used for shared secrets.
//!
//! Encoding maps 5-byte blocks onto the 32-symbol alphabet `A-Z2-7` and
//! pads the output with `=` to a multiple of 8 characters. Decoding is
//! deliberately lenient: any character outside the alphabet (padding,
//! whitespace, lowercase, anything else) is silently skipped, so decoding
//! never fails on malformed input.

/// The 32-symbol alphabet, 5 bits per character.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Trailing `=` count for each remainder of `len % 5` (RFC 4648).
const PADDING: [usize; 5] = [0, 6, 4, 3, 1];

/// Encodes a byte sequence into Base32 text.
///
/// The output length is always a multiple of 8 characters; the final
/// partial block, if any, is padded with zero bits and `=` characters.
/// Every byte value is representable, so this cannot fail.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    encode_len(data, data.len())
}

/// Encodes exactly `len` bytes of `data` into Base32 text.
///
/// Callers may hold a buffer larger than the logical secret; `len` selects
/// the prefix to encode. A `len` past the end of `data` is filled with
/// zero bytes.
#[must_use]
pub fn encode_len(data: &[u8], len: usize) -> String {
    let mut bytes: Vec<u8> = data.iter().copied().take(len).collect();
    bytes.resize(len, 0);
    let rest = len % 5;
    if rest != 0 {
        // Zero bits carry the final partial block up to 40 bits.
        bytes.resize(len + 5 - rest, 0);
    }

    let mut out = String::with_capacity(bytes.len() / 5 * 8);
    for block in bytes.chunks_exact(5) {
        out.push(char::from(ALPHABET[usize::from(block[0] >> 3)]));
        out.push(char::from(
            ALPHABET[usize::from((block[0] & 0x07) << 2 | block[1] >> 6)],
        ));
        out.push(char::from(ALPHABET[usize::from((block[1] & 0x3f) >> 1)]));
        out.push(char::from(
            ALPHABET[usize::from((block[1] & 0x01) << 4 | block[2] >> 4)],
        ));
        out.push(char::from(
            ALPHABET[usize::from((block[2] & 0x0f) << 1 | block[3] >> 7)],
        ));
        out.push(char::from(ALPHABET[usize::from((block[3] & 0x7f) >> 2)]));
        out.push(char::from(
            ALPHABET[usize::from((block[3] & 0x03) << 3 | block[4] >> 5)],
        ));
        out.push(char::from(ALPHABET[usize::from(block[4] & 0x1f)]));
    }

    let padding = PADDING[rest];
    out.truncate(out.len() - padding);
    out.push_str(&"=".repeat(padding));
    out
}

/// Decodes Base32 text into bytes.
///
/// Each valid alphabet character (case-sensitive) contributes 5 bits; a
/// byte is emitted once 8 bits have accumulated. Characters outside the
/// alphabet, including `=` padding, are skipped rather than rejected, so
/// this cannot fail. A terminal partial group whose bits are not all zero
/// emits one final byte with those bits shifted into its high end; the
/// all-zero tail produced by [`encode`]'s own padding emits nothing, which
/// keeps `decode(encode(b)) == b` for every input.
#[must_use]
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for ch in text.bytes() {
        let Some(value) = ALPHABET.iter().position(|&c| c == ch) else {
            continue;
        };
        buffer = buffer << 5 | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    if bits > 0 {
        let tail = (buffer << (8 - bits)) as u8;
        if tail != 0 {
            out.push(tail);
        }
    }

    out
}
