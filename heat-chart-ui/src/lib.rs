//! Shared Dioxus components for the temperature heatmap charts.
//!
//! This crate provides:
//! - `js_bridge`: browser fetch of the temperature CSV via `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for both chart levels and their controls

pub mod components;
pub mod js_bridge;
pub mod state;
