//! The supporter import and personalization pipeline.
//!
//! Each stage here is a plain function over values handed in by the caller:
//! raw rows in, supporters or rendered messages out. Nothing in this module
//! touches the database or the session; the services layer owns that.
//!
//! ```text
//! RawRow ─▶ extractor ─▶ normalizer ─▶ (supporter store) ─▶ selection ─▶ personalizer
//! ```

pub mod extractor;
pub mod normalizer;
pub mod personalizer;
pub mod selection;
