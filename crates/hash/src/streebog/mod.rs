// Copyright 2025 Irreducible Inc.

//! This module implements the GOST R 34.11-2012 hash function ("Streebog").

pub mod arch;
mod backend;
mod chain;
pub mod consts;
mod context;
mod digest;
mod output;
pub mod primitives;
mod table;
pub mod uint512;


pub use arch::{StreebogImpl, StreebogInternal};
pub use backend::{Backend, PORTABLE_ENV_FLAG};
pub use chain::ChainState;
pub use context::{hash, Context};
pub use output::{DigestSize, StreebogDigest};

pub use self::digest::{Streebog256, Streebog512, StreebogCore, StreebogVarCore};

/// Block length in bytes.
pub const BLOCK_LEN: usize = 64;
