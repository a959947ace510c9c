//! Transition rules and the randomness they consume

pub mod draw;
pub mod transition;

pub use draw::{DrawSource, ScriptedDraw, SeededDraw};
pub use transition::{next_status, Chance};
