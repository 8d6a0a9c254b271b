//! Input adapters for the Julia explorer.
//!
//! Receive parameters from the command line and translate them into render
//! requests for the controllers.

pub mod cli;
