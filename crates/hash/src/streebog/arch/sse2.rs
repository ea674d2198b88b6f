// Copyright 2025 Irreducible Inc.

//! Streebog over four SSE2 registers.
//!
//! Register `i` holds lane `2i` in its low half and lane `2i + 1` in its high half. The round
//! transform reads each lane's bytes pairwise with `pextrw`, so one 16-bit extraction feeds
//! two output lanes.

use std::{array, arch::x86_64::*};

use seq_macro::seq;

use super::{
	super::{consts::C, table::LPS_TABLE},
	StreebogInternal,
};

#[derive(Debug, Clone, Default)]
pub struct StreebogSse2;

impl StreebogInternal for StreebogSse2 {
	type State = [__m128i; 4];

	#[inline]
	fn state_from_bytes(bytes: &[u8; 64]) -> Self::State {
		array::from_fn(|i| unsafe { _mm_loadu_si128(bytes[16 * i..].as_ptr() as *const __m128i) })
	}

	#[inline]
	fn state_to_bytes(state: &Self::State) -> [u8; 64] {
		let mut out = [0u8; 64];
		for (chunk, reg) in out.chunks_exact_mut(16).zip(state) {
			unsafe { _mm_storeu_si128(chunk.as_mut_ptr() as *mut __m128i, *reg) };
		}
		out
	}

	#[inline]
	fn xor_state(state: &mut Self::State, other: &Self::State) {
		for (a, b) in state.iter_mut().zip(other) {
			*a = unsafe { _mm_xor_si128(*a, *b) };
		}
	}

	#[inline]
	fn lps(state: &mut Self::State) {
		let x = *state;
		*state = seq!(M in 0..4 {
			[#(lps_lane_pair::<M, { M + 4 }>(&x),)*]
		});
	}

	#[inline]
	fn round_constant(round: usize) -> Self::State {
		let c = &C[round];
		array::from_fn(|i| unsafe { _mm_set_epi64x(c[2 * i + 1] as i64, c[2 * i] as i64) })
	}
}

/// Computes output lanes `2M` and `2M + 1` of `L(P(S(x)))`.
///
/// `LO = M` selects bytes `2M, 2M + 1` of the low lane in every register, `HI = M + 4` the same
/// bytes of the high lane.
#[inline(always)]
fn lps_lane_pair<const LO: i32, const HI: i32>(x: &[__m128i; 4]) -> __m128i {
	let mut even = 0u64;
	let mut odd = 0u64;
	for (i, reg) in x.iter().enumerate() {
		let lo_word = unsafe { _mm_extract_epi16::<LO>(*reg) } as usize;
		let hi_word = unsafe { _mm_extract_epi16::<HI>(*reg) } as usize;
		even ^= LPS_TABLE[2 * i][lo_word & 0xff] ^ LPS_TABLE[2 * i + 1][hi_word & 0xff];
		odd ^= LPS_TABLE[2 * i][lo_word >> 8] ^ LPS_TABLE[2 * i + 1][hi_word >> 8];
	}
	unsafe { _mm_set_epi64x(odd as i64, even as i64) }
}
