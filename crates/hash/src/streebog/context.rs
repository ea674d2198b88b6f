// Copyright 2025 Irreducible Inc.

use std::{cmp, mem};

use gost_utils::{bail, ensure};

use super::{
	arch::portable::StreebogPortable,
	backend::Backend,
	chain::ChainState,
	output::{DigestSize, StreebogDigest},
	BLOCK_LEN,
};
use crate::Error;

/// Chain state bound to one backend. Dispatch happens once per call, never per block.
#[derive(Clone)]
enum Engine {
	Portable(ChainState<StreebogPortable>),
	#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
	Sse2(ChainState<super::arch::sse2::StreebogSse2>),
}

impl Engine {
	fn new(backend: Backend, size: DigestSize) -> Result<Self, Error> {
		match backend {
			Backend::Portable => Ok(Self::Portable(ChainState::new(size))),
			#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
			Backend::Sse2 => Ok(Self::Sse2(ChainState::new(size))),
			#[allow(unreachable_patterns)]
			other => {
				bail!(Error::UnsupportedBackend {
					backend: other.name()
				})
			}
		}
	}

	/// The engine for [`Backend::active`], which is always available.
	fn active(size: DigestSize) -> Self {
		match Backend::active() {
			#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
			Backend::Sse2 => Self::Sse2(ChainState::new(size)),
			_ => Self::Portable(ChainState::new(size)),
		}
	}

	fn backend(&self) -> Backend {
		match self {
			Self::Portable(_) => Backend::Portable,
			#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
			Self::Sse2(_) => Backend::Sse2,
		}
	}

	fn absorb_blocks(&mut self, data: &[u8]) {
		match self {
			Self::Portable(chain) => chain.absorb_blocks(data),
			#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
			Self::Sse2(chain) => chain.absorb_blocks(data),
		}
	}

	fn finalize(&mut self, tail: &[u8]) -> [u8; BLOCK_LEN] {
		match self {
			Self::Portable(chain) => chain.finalize(tail),
			#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
			Self::Sse2(chain) => chain.finalize(tail),
		}
	}
}

#[derive(Clone)]
struct Accepting {
	engine: Engine,
	size: DigestSize,
	buffer: [u8; BLOCK_LEN],
	filled: usize,
	absorbed: u64,
}

impl Accepting {
	fn absorb(&mut self, mut data: &[u8]) {
		self.absorbed = self.absorbed.wrapping_add(data.len() as u64);

		if self.filled > 0 {
			let take = cmp::min(BLOCK_LEN - self.filled, data.len());
			self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
			self.filled += take;
			data = &data[take..];

			if self.filled < BLOCK_LEN {
				return;
			}
			self.engine.absorb_blocks(&self.buffer);
			self.filled = 0;
		}

		let full_len = data.len() - data.len() % BLOCK_LEN;
		self.engine.absorb_blocks(&data[..full_len]);

		let tail = &data[full_len..];
		self.buffer[..tail.len()].copy_from_slice(tail);
		self.filled = tail.len();
	}

	fn finish(mut self) -> StreebogDigest {
		let h = self.engine.finalize(&self.buffer[..self.filled]);
		tracing::trace!(
			bits = self.size.bits(),
			bytes = self.absorbed,
			backend = self.engine.backend().name(),
			"finalized streebog context"
		);
		StreebogDigest::from_chaining_value(self.size, &h)
	}
}

#[derive(Clone, Default)]
enum Phase {
	#[default]
	Uninitialized,
	Accepting(Accepting),
	Finalized,
}

impl Phase {
	fn name(&self) -> &'static str {
		match self {
			Self::Uninitialized => "uninitialized",
			Self::Accepting(_) => "accepting input",
			Self::Finalized => "finalized",
		}
	}

	fn invalid(&self, operation: &'static str) -> Error {
		Error::InvalidState {
			operation,
			state: self.name(),
		}
	}
}

/// State of one streaming Streebog computation.
///
/// A context starts uninitialized, accepts input between [`initialize`](Self::initialize) and
/// [`finalize`](Self::finalize), and is terminal after that until it is initialized again.
/// Calls out of that order fail with [`Error::InvalidState`] and leave the context unchanged.
///
/// ```
/// use gost_hash::{Context, DigestSize};
///
/// let mut ctx = Context::new();
/// ctx.initialize(256)?;
/// ctx.absorb(b"012345678901234567890123456789")?;
/// ctx.absorb(b"012345678901234567890123456789012")?;
/// let digest = ctx.finalize()?;
///
/// assert_eq!(digest.size(), DigestSize::Bits256);
/// assert_eq!(
/// 	digest.to_string(),
/// 	"00557be5e584fd52a449b16b0251d05d27f94ab76cbaa6da890b59d8ef1e159d"
/// );
/// # Ok::<(), gost_hash::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Context {
	phase: Phase,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new computation on [`Backend::active`], discarding any previous state.
	pub fn initialize(&mut self, bits: usize) -> Result<(), Error> {
		self.initialize_with_backend(bits, Backend::active())
	}

	/// Starts a new computation on an explicit backend, discarding any previous state.
	pub fn initialize_with_backend(&mut self, bits: usize, backend: Backend) -> Result<(), Error> {
		let size = DigestSize::try_from(bits)?;
		let engine = Engine::new(backend, size)?;
		self.phase = Phase::Accepting(Accepting {
			engine,
			size,
			buffer: [0; BLOCK_LEN],
			filled: 0,
			absorbed: 0,
		});
		tracing::trace!(bits, backend = backend.name(), "initialized streebog context");
		Ok(())
	}

	pub fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
		match &mut self.phase {
			Phase::Accepting(accepting) => {
				accepting.absorb(data);
				Ok(())
			}
			other => Err(other.invalid("absorb")),
		}
	}

	/// Finishes the computation. The context becomes terminal.
	pub fn finalize(&mut self) -> Result<StreebogDigest, Error> {
		match mem::take(&mut self.phase) {
			Phase::Accepting(accepting) => {
				self.phase = Phase::Finalized;
				Ok(accepting.finish())
			}
			other => {
				let err = other.invalid("finalize");
				self.phase = other;
				Err(err)
			}
		}
	}

	/// Finishes the computation, writing exactly `digest_size / 8` bytes to `out`.
	///
	/// If `out` has the wrong length the context is left accepting input.
	pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
		if let Phase::Accepting(accepting) = &self.phase {
			let expected = accepting.size.output_len();
			ensure!(
				out.len() == expected,
				Error::OutputLength {
					expected,
					actual: out.len()
				}
			);
		}
		let digest = self.finalize()?;
		out.copy_from_slice(digest.as_bytes());
		Ok(())
	}

	/// The digest size of the current computation, if one is in progress.
	pub fn digest_size(&self) -> Option<DigestSize> {
		match &self.phase {
			Phase::Accepting(accepting) => Some(accepting.size),
			_ => None,
		}
	}

	/// The backend of the current computation, if one is in progress.
	pub fn backend(&self) -> Option<Backend> {
		match &self.phase {
			Phase::Accepting(accepting) => Some(accepting.engine.backend()),
			_ => None,
		}
	}

	pub fn is_finalized(&self) -> bool {
		matches!(self.phase, Phase::Finalized)
	}
}

/// Hashes `data` in one call on [`Backend::active`].
pub fn hash(size: DigestSize, data: &[u8]) -> StreebogDigest {
	let mut engine = Engine::active(size);
	let full_len = data.len() - data.len() % BLOCK_LEN;
	engine.absorb_blocks(&data[..full_len]);
	let h = engine.finalize(&data[full_len..]);
	StreebogDigest::from_chaining_value(size, &h)
}
