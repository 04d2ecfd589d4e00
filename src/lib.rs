//! dtmf-wav-rs library crate
//!
//! This module exposes internal types for integration testing.
//! The main binary is in main.rs.

#[macro_use]
extern crate log;

pub mod constants;
pub mod encoder;
pub mod error;
pub mod keypad;
pub mod wav;

#[cfg(test)]
mod keypad_tests;
