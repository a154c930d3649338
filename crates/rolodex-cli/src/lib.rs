//! Rolodex CLI - terminal front end for the users list.
//!
//! Wires the rolodex-core fetch pipeline to a line-oriented renderer:
//! resolve configuration, build the transport stack (optionally wrapped by
//! the mock interceptor), run the fetch, and print each state transition as
//! it lands.

pub mod render;

pub use render::frame;
