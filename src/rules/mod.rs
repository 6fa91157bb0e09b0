//! Static lookup data: vocabulary, whole-string phrases and event kinds.
//!
//! Everything here is immutable and shared process-wide; the engine only reads it.

pub mod events;
pub mod phrases;
pub mod vocab;
