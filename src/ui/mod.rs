//! Terminal keypad for the calculator.

pub mod app;
pub mod keymap;
pub mod keypad;
pub mod render;

pub use app::{App, run};
pub use keypad::Action;
