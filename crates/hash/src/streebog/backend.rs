// Copyright 2025 Irreducible Inc.

use std::fmt;

use gost_utils::env::boolean_env_flag_set;
use lazy_static::lazy_static;

/// Environment flag that pins [`Backend::active`] to the portable backend.
///
/// It applies to [`Context`](super::Context) and [`hash`](super::hash). The
/// [`Streebog256`](super::Streebog256)/[`Streebog512`](super::Streebog512) digest types use the
/// backend chosen at compile time, which only the `portable_only` feature changes.
pub const PORTABLE_ENV_FLAG: &str = "GOST_HASH_PORTABLE";

/// An implementation of the round transform that a [`Context`](super::Context) can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
	/// Table-driven 64-bit lanes, available everywhere.
	Portable,
	/// 128-bit SSE2 registers, x86_64 only.
	Sse2,
}

lazy_static! {
	static ref ACTIVE_BACKEND: Backend = Backend::detect();
}

impl Backend {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Portable => "portable",
			Self::Sse2 => "sse2",
		}
	}

	/// Whether this backend was compiled in.
	pub const fn is_available(self) -> bool {
		match self {
			Self::Portable => true,
			Self::Sse2 => cfg!(all(target_arch = "x86_64", target_feature = "sse2")),
		}
	}

	/// The backend new contexts use by default. Resolved on first call and fixed afterwards.
	pub fn active() -> Self {
		*ACTIVE_BACKEND
	}

	fn detect() -> Self {
		let (backend, reason) = if cfg!(feature = "portable_only") {
			(Self::Portable, "portable_only feature")
		} else if boolean_env_flag_set(PORTABLE_ENV_FLAG) {
			(Self::Portable, PORTABLE_ENV_FLAG)
		} else if Self::Sse2.is_available() {
			(Self::Sse2, "target supports sse2")
		} else {
			(Self::Portable, "no vector backend for target")
		};
		tracing::debug!(backend = backend.name(), reason, "selected streebog backend");
		backend
	}
}

impl fmt::Display for Backend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
