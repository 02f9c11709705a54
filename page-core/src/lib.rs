//! Page behavior controller
//!
//! Three independent behaviors attached to a static digest page:
//! - theme switching backed by a single persisted preference
//! - category filtering of headline cards and list items
//! - a back-to-top control driven by the scroll offset
//!
//! Everything here is platform independent. The browser binding lives in
//! `page-behavior` and supplies `web-sys` implementations of the traits in
//! [`handles`]; tests use the in-memory ones from [`memory`].

pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod handles;
pub mod memory;
pub mod scroll;
pub mod theme;

pub use category::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use handles::*;
pub use scroll::*;
pub use theme::*;
