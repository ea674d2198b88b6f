// Copyright 2023-2024 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Unsupported digest size: {bits} bits (expected 256 or 512)")]
	UnsupportedDigestSize { bits: usize },
	#[error("Cannot {operation} a context that is {state}")]
	InvalidState {
		operation: &'static str,
		state: &'static str,
	},
	#[error("Output buffer has wrong length (expected {expected} bytes, got {actual} bytes)")]
	OutputLength { expected: usize, actual: usize },
	#[error("Malformed digest string")]
	InvalidHex,
	#[error("Backend {backend} is not available on this target")]
	UnsupportedBackend { backend: &'static str },
}
