//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod diagnostic_helpers;
pub mod source_fixtures;
pub mod symbol_assertions;

/// Run `f` on a thread with a 2 MiB stack, the size rayon's workers get.
pub fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}
