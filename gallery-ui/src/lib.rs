//! gallery-ui - Pure view components for the portfolio gallery
//!
//! Every component here is props-based and performs no I/O. The web shell
//! owns state and fetching and passes plain values down.

pub mod components;

pub use components::*;
