// Copyright 2023-2025 Irreducible Inc.

//! Streaming GOST R 34.11-2012 ("Streebog") hashing with 256- and 512-bit digests.
//!
//! [`Context`] is the lifecycle-checked engine API; [`Streebog256`] and [`Streebog512`]
//! implement the [`digest`] traits.

mod error;
pub mod streebog;

pub use digest::{self, Digest};
pub use error::Error;
pub use streebog::*;
