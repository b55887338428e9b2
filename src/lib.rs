#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
extern crate alloc;

#[macro_use]
mod macros;

mod constants;
mod decimal;
mod error;
mod int128;
mod maths;
mod ops;
mod str;

#[cfg(feature = "rust-fuzz")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "rand")]
mod rand;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;

pub use decimal::{Decimal, RoundingMode};
pub use error::{Error, ErrorKind};
pub use int128::Int128;

/// A convenience module appropriate for glob imports (`use wide_decimal::prelude::*;`).
pub mod prelude {
    pub use crate::{Decimal, Int128, RoundingMode};
    pub use core::str::FromStr;
    pub use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
}

/// Shortcut for `core::result::Result<T, wide_decimal::Error>`. Useful to distinguish
/// between the crate's error type and other errors.
pub type Result<T> = core::result::Result<T, Error>;
