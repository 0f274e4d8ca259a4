// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod percent_arg;
pub mod percent_impl;
pub mod value_according_percent_impl;

// Re-export.
pub use percent_arg::*;
pub use percent_impl::*;
pub use value_according_percent_impl::*;
