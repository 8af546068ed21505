//! Interactive terminal front end for the dashboard.
//!
//! [`components`] holds the reusable widgets; [`App`] wires them to a
//! [`Dashboard`](crate::dashboard::Dashboard) and [`run`] drives the event loop.

mod actions;
mod app;
pub mod components;
mod runtime;
pub mod style;

pub use app::App;
pub use runtime::run;
