// Copyright (c) 2020-2025 The RustCrypto Project Developers
// Copyright 2025 Irreducible Inc.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		CtVariableCoreWrapper, OutputSizeUser, TruncSide, UpdateCore, VariableOutputCore,
	},
	typenum::{U32, U64},
	HashMarker, InvalidOutputSize, Output,
};

use super::{
	arch::{StreebogImpl, StreebogInternal},
	chain::ChainState,
	output::DigestSize,
};

/// Lowest-level core hasher state of Streebog, generic over the backend.
pub struct StreebogVarCore<G: StreebogInternal> {
	chain: ChainState<G>,
}

/// Core hasher state of Streebog generic over output size.
pub type StreebogCore<OutSize> = CtVariableCoreWrapper<StreebogVarCore<StreebogImpl>, OutSize>;
/// Streebog-256 hasher state.
pub type Streebog256 = CoreWrapper<StreebogCore<U32>>;
/// Streebog-512 hasher state.
pub type Streebog512 = CoreWrapper<StreebogCore<U64>>;

impl<G: StreebogInternal> Clone for StreebogVarCore<G> {
	fn clone(&self) -> Self {
		Self {
			chain: self.chain.clone(),
		}
	}
}

impl<G: StreebogInternal> HashMarker for StreebogVarCore<G> {}

impl<G: StreebogInternal> BlockSizeUser for StreebogVarCore<G> {
	type BlockSize = U64;
}

impl<G: StreebogInternal> BufferKindUser for StreebogVarCore<G> {
	type BufferKind = Eager;
}

impl<G: StreebogInternal> UpdateCore for StreebogVarCore<G> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.chain.absorb_blocks(block);
		}
	}
}

impl<G: StreebogInternal> OutputSizeUser for StreebogVarCore<G> {
	type OutputSize = U64;
}

impl<G: StreebogInternal> VariableOutputCore for StreebogVarCore<G> {
	// The 256-bit digest is the high half of the chaining value.
	const TRUNC_SIDE: TruncSide = TruncSide::Right;

	#[inline]
	fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
		let size = DigestSize::try_from(8 * output_size).map_err(|_| InvalidOutputSize)?;
		Ok(Self {
			chain: ChainState::new(size),
		})
	}

	#[inline]
	fn finalize_variable_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let h = self.chain.finalize(buffer.get_data());
		out.copy_from_slice(&h);
	}
}

impl<G: StreebogInternal> AlgorithmName for StreebogVarCore<G> {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Streebog")
	}
}

impl<G: StreebogInternal> fmt::Debug for StreebogVarCore<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("StreebogVarCore { ... }")
	}
}
