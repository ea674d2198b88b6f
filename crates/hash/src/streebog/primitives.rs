// Copyright 2025 Irreducible Inc.

//! The round transforms `S`, `P` and `L` computed directly from their definitions.
//!
//! A 512-bit value is a 64-byte string for `S` and `P`, and eight little-endian 64-bit lanes
//! for `L`. The conversions between the two views are explicit and independent of the host
//! byte order.

use std::array;

use super::consts::{A, PI, TAU};

/// Splits 64 bytes into eight little-endian lanes.
#[inline]
pub fn bytes_to_lanes(bytes: &[u8; 64]) -> [u64; 8] {
	array::from_fn(|i| u64::from_le_bytes(array::from_fn(|j| bytes[8 * i + j])))
}

/// Inverse of [`bytes_to_lanes`].
#[inline]
pub fn lanes_to_bytes(lanes: &[u64; 8]) -> [u8; 64] {
	let mut out = [0u8; 64];
	for (chunk, lane) in out.chunks_exact_mut(8).zip(lanes) {
		chunk.copy_from_slice(&lane.to_le_bytes());
	}
	out
}

pub fn xor(a: &[u8; 64], b: &[u8; 64]) -> [u8; 64] {
	array::from_fn(|i| a[i] ^ b[i])
}

/// `S`: applies `π` to every byte.
pub fn substitute(x: &[u8; 64]) -> [u8; 64] {
	array::from_fn(|i| PI[x[i] as usize])
}

/// `P`: transposes the value viewed as an 8x8 byte matrix.
pub fn transpose(x: &[u8; 64]) -> [u8; 64] {
	array::from_fn(|i| x[TAU[i] as usize])
}

/// `l`: multiplies one lane by the binary matrix `A`.
pub const fn linear_lane(lane: u64) -> u64 {
	let mut out = 0;
	let mut k = 0;
	while k < 64 {
		if (lane >> (63 - k)) & 1 == 1 {
			out ^= A[k];
		}
		k += 1;
	}
	out
}

/// `L`: applies `l` to each of the eight lanes.
pub fn linear(x: &[u8; 64]) -> [u8; 64] {
	lanes_to_bytes(&bytes_to_lanes(x).map(linear_lane))
}

/// One full round transform `L(P(S(x)))`.
pub fn lps(x: &[u8; 64]) -> [u8; 64] {
	linear(&transpose(&substitute(x)))
}
