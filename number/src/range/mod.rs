// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod range_each_impl;

// Re-export.
pub use range_each_impl::*;
