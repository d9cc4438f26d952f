//! Shared helpers used by the link heuristics

pub mod text;

pub use text::{all_numeric, is_alpha, is_numeric, is_titled, split_space};
