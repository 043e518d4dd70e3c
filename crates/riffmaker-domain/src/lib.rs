//! riffmaker-domain: the persisted data model for Riff Maker.
//!
//! A riff is a short structured note about a musical idea: title, tempo,
//! tuning, free text, and an optional reference to a recorded voice memo.
//! This crate holds the model, its validation rules, the fixed configuration
//! constants, and pure display helpers. No I/O lives here.

pub mod constants;
pub mod format;
pub mod riff;
pub mod tuning;

pub use constants::*;
pub use format::*;
pub use riff::*;
pub use tuning::*;
