//! Candidate-line encoding and the interactive selector session

pub mod codec;
mod session;

pub use session::SelectorSession;
