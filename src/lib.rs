// Main library entry point for callmap.

pub mod domain;
pub mod ports;

pub use domain::graph::{FunctionGraph, FunctionNode};
