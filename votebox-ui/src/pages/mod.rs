//! Pages
//!
//! Top-level page components for each route.

pub mod poll;

pub use poll::Poll;
