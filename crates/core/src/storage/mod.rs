pub mod format;
pub mod manager;
pub mod memory;
pub mod traits;

// Directory-backed store (native only, not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
