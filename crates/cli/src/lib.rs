//! Demonstration runner: the fixed print sequence contrasting value and
//! identity semantics.

pub mod demo;
