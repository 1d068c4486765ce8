//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `carousel`) so individual components
//! can depend on small focused models. Structs are plain data; reactivity
//! lives in the page layer, which mirrors the rendered fields into signals.

pub mod auth;
pub mod carousel;
