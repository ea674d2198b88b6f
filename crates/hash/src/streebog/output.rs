// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use super::consts::{IV_256, IV_512};
use crate::Error;

/// Length of the digest, fixed when a computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestSize {
	Bits256,
	Bits512,
}

impl DigestSize {
	pub const fn bits(self) -> usize {
		match self {
			Self::Bits256 => 256,
			Self::Bits512 => 512,
		}
	}

	/// Digest length in bytes.
	pub const fn output_len(self) -> usize {
		self.bits() / 8
	}

	pub(crate) const fn iv(self) -> &'static [u8; 64] {
		match self {
			Self::Bits256 => &IV_256,
			Self::Bits512 => &IV_512,
		}
	}
}

impl TryFrom<usize> for DigestSize {
	type Error = Error;

	fn try_from(bits: usize) -> Result<Self, Self::Error> {
		match bits {
			256 => Ok(Self::Bits256),
			512 => Ok(Self::Bits512),
			_ => Err(Error::UnsupportedDigestSize { bits }),
		}
	}
}

/// A finished Streebog digest.
///
/// [`as_bytes`](Self::as_bytes) returns the digest in the byte order it is produced in. The
/// `Display` form is lowercase hex of those bytes in reverse order, as used by checksum list
/// files; `FromStr` parses it back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreebogDigest {
	bytes: [u8; 64],
	size: DigestSize,
}

impl StreebogDigest {
	/// Takes the digest out of a final chaining value. The 256-bit digest is its high half.
	pub(crate) fn from_chaining_value(size: DigestSize, h: &[u8; 64]) -> Self {
		let len = size.output_len();
		let mut bytes = [0u8; 64];
		bytes[..len].copy_from_slice(&h[64 - len..]);
		Self { bytes, size }
	}

	pub fn size(&self) -> DigestSize {
		self.size
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.size.output_len()]
	}
}

impl AsRef<[u8]> for StreebogDigest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl fmt::Display for StreebogDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.as_bytes().iter().rev() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for StreebogDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "StreebogDigest({}, {self})", self.size.bits())
	}
}

impl FromStr for StreebogDigest {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let size = match s.len() {
			64 => DigestSize::Bits256,
			128 => DigestSize::Bits512,
			_ => return Err(Error::InvalidHex),
		};
		let len = size.output_len();
		let mut bytes = [0u8; 64];
		for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
			bytes[len - 1 - i] = (hex_value(pair[0])? << 4) | hex_value(pair[1])?;
		}
		Ok(Self { bytes, size })
	}
}

fn hex_value(c: u8) -> Result<u8, Error> {
	match c {
		b'0'..=b'9' => Ok(c - b'0'),
		b'a'..=b'f' => Ok(c - b'a' + 10),
		b'A'..=b'F' => Ok(c - b'A' + 10),
		_ => Err(Error::InvalidHex),
	}
}
