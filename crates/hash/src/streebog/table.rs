// Copyright 2025 Irreducible Inc.

use super::{consts::PI, primitives::linear_lane};

/// `LPS_TABLE[k][b]` is the contribution of byte `π(b)` in byte position `k` of a lane to the
/// output of `l`.
///
/// Output lane `j` of `L(P(S(x)))` is the XOR over `k` of `LPS_TABLE[k][byte j of lane k]`.
pub(crate) static LPS_TABLE: [[u64; 256]; 8] = build_lps_table();

const fn build_lps_table() -> [[u64; 256]; 8] {
	let mut table = [[0u64; 256]; 8];
	let mut k = 0;
	while k < 8 {
		let mut b = 0;
		while b < 256 {
			table[k][b] = linear_lane((PI[b] as u64) << (8 * k));
			b += 1;
		}
		k += 1;
	}
	table
}
