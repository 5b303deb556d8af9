//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: dog-profile documents are fetched
//! from the serving origin and the address bar is driven through `location`/`history`. Native
//! builds compile the same adapters with inert bodies so the runtime can be unit tested.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod dogs;
pub mod location;

pub use adapters::{
    build_host_services, dog_profile_service, host_strategy_name, location_service,
    selected_host_strategy, DogProfileServiceAdapter, LocationServiceAdapter,
};
pub use dogs::WebDogProfileService;
pub use location::WebLocationService;

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_to_string(err: wasm_bindgen::JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}
