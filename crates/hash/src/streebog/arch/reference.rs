// Copyright 2025 Irreducible Inc.

use super::{
	super::{
		consts::C,
		primitives::{lanes_to_bytes, lps, xor},
	},
	StreebogInternal,
};

/// Byte-level implementation that runs `S`, `P` and `L` one after another, without the
/// precomputed table. Slow; used to cross-check the optimized implementations.
#[derive(Debug, Clone, Default)]
pub struct StreebogReference;

impl StreebogInternal for StreebogReference {
	type State = [u8; 64];

	fn state_from_bytes(bytes: &[u8; 64]) -> Self::State {
		*bytes
	}

	fn state_to_bytes(state: &Self::State) -> [u8; 64] {
		*state
	}

	fn xor_state(state: &mut Self::State, other: &Self::State) {
		*state = xor(state, other);
	}

	fn lps(state: &mut Self::State) {
		*state = lps(state);
	}

	fn round_constant(round: usize) -> Self::State {
		lanes_to_bytes(&C[round])
	}
}
