//! Grammars built on the engine, used by the benchmarks
//!
//! Each grammar exposes `parse(text)`, which reduces a failed parse to an
//! empty value.

pub mod nesting;
pub mod repeat;
