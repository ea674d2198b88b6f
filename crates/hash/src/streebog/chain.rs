// Copyright 2025 Irreducible Inc.

use super::{arch::StreebogInternal, output::DigestSize, uint512::Uint512, BLOCK_LEN};

const BLOCK_BITS: u64 = 8 * BLOCK_LEN as u64;
const ZERO_BLOCK: [u8; BLOCK_LEN] = [0; BLOCK_LEN];

/// The running state of one Streebog computation: chaining value `h`, bit counter `N` and
/// checksum `Σ`. Input arrives in whole blocks; buffering is the caller's job.
pub struct ChainState<G: StreebogInternal> {
	h: G::State,
	n: Uint512,
	sigma: Uint512,
}

impl<G: StreebogInternal> Clone for ChainState<G> {
	fn clone(&self) -> Self {
		Self {
			h: self.h.clone(),
			n: self.n,
			sigma: self.sigma,
		}
	}
}

impl<G: StreebogInternal> ChainState<G> {
	pub fn new(size: DigestSize) -> Self {
		Self {
			h: G::state_from_bytes(size.iv()),
			n: Uint512::ZERO,
			sigma: Uint512::ZERO,
		}
	}

	#[inline]
	pub fn absorb_block(&mut self, block: &[u8; BLOCK_LEN]) {
		G::compress(&mut self.h, self.n.as_le_bytes(), block);
		self.sigma.wrapping_add_assign(block);
		self.n.wrapping_add_u64(BLOCK_BITS);
	}

	/// Absorbs `data`, whose length must be a multiple of the block length.
	pub fn absorb_blocks(&mut self, data: &[u8]) {
		debug_assert_eq!(data.len() % BLOCK_LEN, 0);
		let mut block = [0u8; BLOCK_LEN];
		for chunk in data.chunks_exact(BLOCK_LEN) {
			block.copy_from_slice(chunk);
			self.absorb_block(&block);
		}
	}

	/// Pads and absorbs the final partial block `tail`, folds in `N` and `Σ`, and returns the
	/// final chaining value.
	pub fn finalize(&mut self, tail: &[u8]) -> [u8; BLOCK_LEN] {
		debug_assert!(tail.len() < BLOCK_LEN);
		let mut block = [0u8; BLOCK_LEN];
		block[..tail.len()].copy_from_slice(tail);
		block[tail.len()] = 0x01;

		G::compress(&mut self.h, self.n.as_le_bytes(), &block);
		self.sigma.wrapping_add_assign(&block);
		self.n.wrapping_add_u64(8 * tail.len() as u64);

		G::compress(&mut self.h, &ZERO_BLOCK, self.n.as_le_bytes());
		G::compress(&mut self.h, &ZERO_BLOCK, self.sigma.as_le_bytes());
		G::state_to_bytes(&self.h)
	}
}
