// Copyright 2025 Irreducible Inc.

use std::array;

use super::{
	super::{
		consts::C,
		primitives::{bytes_to_lanes, lanes_to_bytes},
		table::LPS_TABLE,
	},
	StreebogInternal,
};

/// Table-driven implementation over eight 64-bit lanes.
#[derive(Debug, Clone, Default)]
pub struct StreebogPortable;

impl StreebogInternal for StreebogPortable {
	type State = [u64; 8];

	#[inline]
	fn state_from_bytes(bytes: &[u8; 64]) -> Self::State {
		bytes_to_lanes(bytes)
	}

	#[inline]
	fn state_to_bytes(state: &Self::State) -> [u8; 64] {
		lanes_to_bytes(state)
	}

	#[inline]
	fn xor_state(state: &mut Self::State, other: &Self::State) {
		for (a, b) in state.iter_mut().zip(other) {
			*a ^= b;
		}
	}

	#[inline]
	fn lps(state: &mut Self::State) {
		*state = lps_lanes(state);
	}

	#[inline]
	fn round_constant(round: usize) -> Self::State {
		C[round]
	}
}

#[inline(always)]
fn lps_lanes(x: &[u64; 8]) -> [u64; 8] {
	array::from_fn(|j| {
		let shift = 8 * j;
		let mut out = 0;
		for (k, lane) in x.iter().enumerate() {
			out ^= LPS_TABLE[k][((lane >> shift) & 0xff) as usize];
		}
		out
	})
}
