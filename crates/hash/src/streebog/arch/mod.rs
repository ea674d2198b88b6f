// Copyright 2024-2025 Irreducible Inc.

use cfg_if::cfg_if;

pub mod portable;
pub mod reference;
#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
pub mod sse2;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "sse2", not(feature = "portable_only")))] {
		pub use sse2::StreebogSse2 as StreebogImpl;
	} else {
		pub use portable::StreebogPortable as StreebogImpl;
	}
}

/// Number of rounds of the key schedule.
pub const ROUNDS: usize = 12;

/// A representation of the 512-bit Streebog state together with the round transform on it.
///
/// Implementations only provide the state layout and `L ∘ P ∘ S`; the key schedule and the
/// compression function are shared, so every implementation computes the same digests.
pub trait StreebogInternal {
	type State: Clone;

	fn state_from_bytes(bytes: &[u8; 64]) -> Self::State;

	fn state_to_bytes(state: &Self::State) -> [u8; 64];

	fn xor_state(state: &mut Self::State, other: &Self::State);

	/// Applies `L(P(S(x)))` in place.
	fn lps(state: &mut Self::State);

	/// Round constant `C_{round + 1}`.
	fn round_constant(round: usize) -> Self::State;

	/// The keyed permutation `E(K, m)`. `key` holds `K_1` on entry and is advanced through
	/// the schedule.
	fn encrypt(key: &mut Self::State, block: &Self::State) -> Self::State {
		let mut state = block.clone();
		Self::xor_state(&mut state, key);
		for round in 0..ROUNDS {
			Self::lps(&mut state);
			Self::xor_state(key, &Self::round_constant(round));
			Self::lps(key);
			Self::xor_state(&mut state, key);
		}
		state
	}

	/// The compression function `g_N(h, m) = E(LPS(h ⊕ N), m) ⊕ h ⊕ m`.
	fn compress(h: &mut Self::State, n: &[u8; 64], block: &[u8; 64]) {
		let m = Self::state_from_bytes(block);
		let mut key = h.clone();
		Self::xor_state(&mut key, &Self::state_from_bytes(n));
		Self::lps(&mut key);

		let mut out = Self::encrypt(&mut key, &m);
		Self::xor_state(&mut out, h);
		Self::xor_state(&mut out, &m);
		*h = out;
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::{portable::StreebogPortable, reference::StreebogReference, *};

	fn compress_with<G: StreebogInternal>(h: &[u8; 64], n: &[u8; 64], m: &[u8; 64]) -> [u8; 64] {
		let mut state = G::state_from_bytes(h);
		G::compress(&mut state, n, m);
		G::state_to_bytes(&state)
	}

	fn lps_with<G: StreebogInternal>(x: &[u8; 64]) -> [u8; 64] {
		let mut state = G::state_from_bytes(x);
		G::lps(&mut state);
		G::state_to_bytes(&state)
	}

	fn arb_block() -> impl Strategy<Value = [u8; 64]> {
		prop::collection::vec(any::<u8>(), 64).prop_map(|v| {
			let mut block = [0u8; 64];
			block.copy_from_slice(&v);
			block
		})
	}

	proptest! {
		#[test]
		fn test_portable_lps_matches_reference(x in arb_block()) {
			prop_assert_eq!(lps_with::<StreebogPortable>(&x), lps_with::<StreebogReference>(&x));
		}

		#[test]
		fn test_portable_compress_matches_reference(
			h in arb_block(),
			n in arb_block(),
			m in arb_block(),
		) {
			prop_assert_eq!(
				compress_with::<StreebogPortable>(&h, &n, &m),
				compress_with::<StreebogReference>(&h, &n, &m)
			);
		}

		#[test]
		fn test_default_compress_matches_reference(
			h in arb_block(),
			n in arb_block(),
			m in arb_block(),
		) {
			prop_assert_eq!(
				compress_with::<StreebogImpl>(&h, &n, &m),
				compress_with::<StreebogReference>(&h, &n, &m)
			);
		}

		#[test]
		fn test_state_bytes_roundtrip(x in arb_block()) {
			prop_assert_eq!(
				StreebogImpl::state_to_bytes(&StreebogImpl::state_from_bytes(&x)),
				x
			);
		}
	}
}
