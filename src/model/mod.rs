//! Data model shared by the parser, the selector, and the queue side
//!
//! Independent of both the database dump format and the external tools'
//! line protocols.

mod track;

pub use track::Track;
