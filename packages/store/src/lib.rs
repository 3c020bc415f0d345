pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

pub use config::{ApiConfig, ClientConfig, PaymentsConfig};
pub use token::{TokenStore, SESSION_TOKEN_KEY};
