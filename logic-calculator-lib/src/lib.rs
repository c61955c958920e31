//! Parses and evaluates single-line arithmetic and propositional logic expressions
//! over 64-bit integers, e.g. `(1 + 2) * 3 -> ~0`.

pub mod interpreter;

pub use interpreter::{
    build, calculate, evaluate, render_infix, render_postfix, tokenize, tokens_to_string,
};
