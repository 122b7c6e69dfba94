//! Main module for ogsl library functionality

pub mod ast;
pub mod building;
pub mod lexing;
pub mod loader;
pub mod pipeline;
pub mod projection;
pub mod testing;
pub mod token;
