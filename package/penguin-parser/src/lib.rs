#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

pub mod error;
pub mod expression;
pub mod parser;
