// Domain types for callmap.

pub mod graph;
