//! Pokedex - single-record viewer built on tui-dispatch
//!
//! The library exposes the viewer's modules so the binary and the
//! integration tests share one store definition.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod format;
pub mod reducer;
pub mod state;
