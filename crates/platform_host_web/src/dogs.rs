//! Dog-profile document adapter backed by the browser `fetch` API.

use platform_host::{DogProfile, DogProfileError, DogProfileFuture, DogProfileService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser adapter fetching `/dogs/{slug}.json` from the serving origin.
pub struct WebDogProfileService;

impl DogProfileService for WebDogProfileService {
    fn load_profile<'a>(
        &'a self,
        slug: &'a str,
    ) -> DogProfileFuture<'a, Result<DogProfile, DogProfileError>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return fetch_profile(&platform_host::dog_profile_url(slug)).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = slug;
                Err(DogProfileError::Network(
                    "fetch is only available in the browser".to_string(),
                ))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_profile(url: &str) -> Result<DogProfile, DogProfileError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| DogProfileError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| DogProfileError::Network(crate::js_error_to_string(err)))?;
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|_| DogProfileError::Network("fetch resolved to a non-response".to_string()))?;
    if !response.ok() {
        return Err(DogProfileError::NotFound);
    }

    let body = response
        .text()
        .map_err(|err| DogProfileError::Network(crate::js_error_to_string(err)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| DogProfileError::Network(crate::js_error_to_string(err)))?
        .as_string()
        .ok_or_else(|| DogProfileError::Decode("response body is not text".to_string()))?;
    platform_host::decode_dog_profile(&text)
}
