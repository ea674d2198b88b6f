// Copyright 2025 Irreducible Inc.

//! Fixed-width unsigned integers stored as little-endian byte arrays.

/// An unsigned integer of `W` bytes, little-endian, with all arithmetic modulo `2^(8W)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrappingUint<const W: usize>([u8; W]);

/// The 512-bit integers used for the bit counter `N` and the checksum `Σ`.
pub type Uint512 = WrappingUint<64>;

impl<const W: usize> WrappingUint<W> {
	pub const ZERO: Self = Self([0; W]);
	pub const MAX: Self = Self([0xff; W]);

	pub const fn from_le_bytes(bytes: [u8; W]) -> Self {
		Self(bytes)
	}

	/// Low bytes of `val`, truncated if `W < 8`.
	pub const fn from_u64(val: u64) -> Self {
		let mut bytes = [0u8; W];
		let mut i = 0;
		while i < W && i < 8 {
			bytes[i] = (val >> (8 * i)) as u8;
			i += 1;
		}
		Self(bytes)
	}

	pub const fn as_le_bytes(&self) -> &[u8; W] {
		&self.0
	}

	/// `self = (self + rhs) mod 2^(8W)`, with `rhs` given as little-endian bytes.
	pub fn wrapping_add_assign(&mut self, rhs: &[u8; W]) {
		let mut carry = 0u16;
		for (a, &b) in self.0.iter_mut().zip(rhs) {
			let sum = *a as u16 + b as u16 + carry;
			*a = sum as u8;
			carry = sum >> 8;
		}
	}

	/// `self = (self + val) mod 2^(8W)`.
	pub fn wrapping_add_u64(&mut self, val: u64) {
		// Amount still to be added at the current byte position, in units of that position.
		let mut pending = val;
		for a in self.0.iter_mut() {
			if pending == 0 {
				break;
			}
			let sum = *a as u64 + (pending & 0xff);
			*a = sum as u8;
			pending = (pending >> 8) + (sum >> 8);
		}
	}
}

impl<const W: usize> Default for WrappingUint<W> {
	fn default() -> Self {
		Self::ZERO
	}
}
