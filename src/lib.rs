//! deskcalc: a four-function keypad calculator.
//!
//! The [`calculator`] module holds the engine; [`ui`] is a terminal keypad
//! in front of it and [`script`] drives it from a string of key labels.

pub mod calculator;
pub mod config;
pub mod script;
pub mod ui;
