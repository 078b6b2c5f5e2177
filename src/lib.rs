//! Elm-style Model-View-Update samples for the terminal.
//!
//! The reusable message loop lives in [`mvu`]; [`counter`] and [`finder`]
//! are the sample applications built on it, and [`ui`] wires them to
//! ratatui. The loop itself has no dependency on any rendering technology.

pub mod config;
pub mod counter;
pub mod finder;
pub mod mvu;
pub mod shutdown;
pub mod trace;
pub mod ui;
