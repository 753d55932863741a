//! Platform token storage for the page.
//!
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file under `<data_dir>/signup-board/` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only, nothing survives a reload

use store::BoardConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryStore;

/// Create the token store configured by `[storage]`.
pub fn make_token_store(config: &BoardConfig) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new(config.storage.token_key.clone())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("signup-board");
        store::FileStore::new(base, config.storage.token_key.clone())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryStore::new()
    }
}
