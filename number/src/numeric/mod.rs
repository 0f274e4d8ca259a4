// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod is_numeric_impl;
pub mod numeric_candidate;
pub mod numeric_grammar;

// Re-export.
pub use is_numeric_impl::*;
pub use numeric_candidate::*;
pub use numeric_grammar::*;
