pub mod interpreter;

pub use interpreter::{evaluate, render, Conversion, Error};
