//! Table operations, one module per table.
//!
//! Each module contains an `impl Database` block.

mod notes;
mod share_grants;
