#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use native::open_store;
#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::open_store;
