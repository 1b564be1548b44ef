//! Chirp core: the platform-agnostic half of the Chirp front-end.
//!
//! Everything here runs on any target: route keys and URL matching, the
//! module-shape adapters and the route-module cache that memoizes lazy page
//! loads, the in-memory stores backing the mock dashboard, and the
//! early-access registration types. The browser-facing half lives in the
//! `chirp_web` crate.

#[path = "core/cache.rs"]
pub mod cache;

#[path = "core/loader.rs"]
pub mod loader;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/router.rs"]
pub mod router;

pub mod early_access;
pub mod mock;
pub mod store;
