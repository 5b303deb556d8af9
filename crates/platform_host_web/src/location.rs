//! Location hash adapter backed by `window.location` and `window.history`.

use platform_host::LocationService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser adapter that reads `location.hash` and writes through `history.pushState`.
pub struct WebLocationService;

impl LocationService for WebLocationService {
    fn current_hash(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.location().hash().ok())
                .unwrap_or_default();
        }

        #[cfg(not(target_arch = "wasm32"))]
        String::new()
    }

    fn push_hash(&self, hash: Option<&str>) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            let base = format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            );
            let url = match hash {
                Some(hash) => format!("{base}{hash}"),
                None => base,
            };
            let title = window.document().map(|doc| doc.title()).unwrap_or_default();
            let pushed = window.history().and_then(|history| {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, &title, Some(&url))
            });
            if let Err(err) = pushed {
                web_sys::console::warn_1(&err);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = hash;
    }
}
