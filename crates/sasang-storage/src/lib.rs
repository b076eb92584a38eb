//! sasang-storage
//!
//! Persistence for saved assessments. A local object store keyed by the
//! conventions in `sasang_core::keys`, plus typed helpers on top of it.

pub mod assessments;
pub mod error;
pub mod objects;
pub mod state;
