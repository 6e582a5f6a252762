//! CLI-facing outcome shaping.

pub(crate) mod outcome;
