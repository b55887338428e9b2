mod fmt;
mod parse;

pub(crate) use fmt::{int128_to_str, to_str_internal};
pub(crate) use parse::{parse_decimal, parse_int128};
