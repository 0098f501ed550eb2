//! Glagol Language Front End
//!
//! Glagol is a small educational language whose keywords are drawn from
//! Church Slavonic. This crate splits source text into classified tokens
//! and builds a syntax tree from them by recursive descent; running or
//! checking the resulting tree is somebody else's job.

pub mod lexer;
pub mod parser;

pub use lexer::*;
pub use parser::*;
