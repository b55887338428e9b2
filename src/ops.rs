// Decimal arithmetic. Every operation unpacks the 96 bit mantissas into `Int128`
// working values, aligns scales where necessary and packs the normalized result.

mod add;
mod cmp;
pub(crate) mod common;
mod div;
mod mul;
pub(crate) mod round;

pub(crate) use add::{add_impl, sub_impl};
pub(crate) use cmp::cmp_impl;
pub(crate) use common::CalculationResult;
pub(crate) use div::div_impl;
pub(crate) use mul::mul_impl;
