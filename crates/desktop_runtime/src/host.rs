//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches the address bar, the network or the
//! browser window goes through [`DesktopHostContext`], which wraps the injected
//! [`HostServices`] bundle so tests can swap in in-memory adapters.

use leptos::{logging, spawn_local};
use platform_host::{DogProfileService, HostServices};

use crate::{
    location::TreeLocation,
    model::WindowId,
    reducer::{DesktopAction, RuntimeEffect},
    router::location_to_hash,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the host bundle selected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Current location hash, including the leading `#`.
    pub fn current_hash(&self) -> String {
        self.services.location.current_hash()
    }

    /// Pushes a history entry for `location`, or one without a hash for `None`.
    pub fn push_location(&self, location: Option<&TreeLocation>) {
        let hash = location.map(location_to_hash);
        self.services.location.push_hash(hash.as_deref());
    }

    /// Scale that fits the logical desktop into the browser window.
    pub fn viewport_scale(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::{
                model::{DESKTOP_HEIGHT, DESKTOP_WIDTH},
                window_manager::viewport_scale_for,
            };

            let Some(window) = web_sys::window() else {
                return 1.0;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(f64::from(DESKTOP_WIDTH));
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(f64::from(DESKTOP_HEIGHT));
            return viewport_scale_for(width, height);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            1.0
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::UpdateUrl(location) => self.push_location(location.as_ref()),
            RuntimeEffect::LoadDogProfile {
                window_id,
                location,
            } => self.load_dog_profile(runtime, window_id, location),
        }
    }

    fn load_dog_profile(
        &self,
        runtime: DesktopRuntimeContext,
        window_id: WindowId,
        location: TreeLocation,
    ) {
        let dogs = self.services.dogs.clone();
        spawn_local(async move {
            let action = fetch_dog_profile(dogs.as_ref(), window_id, location).await;
            runtime.dispatch_action(action);
        });
    }
}

/// Fetches the profile named by the location's last key and wraps the outcome in the
/// completion action for `window_id`.
pub async fn fetch_dog_profile(
    dogs: &dyn DogProfileService,
    window_id: WindowId,
    location: TreeLocation,
) -> DesktopAction {
    let result = dogs.load_profile(location.last_key()).await;
    if let Err(err) = &result {
        logging::warn!("dog profile load failed for {location}: {err}");
    }
    DesktopAction::DogProfileLoaded {
        window_id,
        location,
        result,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{
        DogProfile, DogProfileError, MemoryDogProfileService, MemoryLocationService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile(name: &str) -> DogProfile {
        DogProfile {
            name: name.to_string(),
            breed: "Australian Shepherd".to_string(),
            date_of_birth: "2021-04-02".to_string(),
            registration: "KC-42".to_string(),
            description: Some("Loves agility.".to_string()),
            color: "Blue merle".to_string(),
            weight: 22.5,
            height: 53.0,
            health_tests: vec!["Hips".to_string()],
            vaccinations_up_to_date: true,
            show_results: Vec::new(),
            dna_tests: Vec::new(),
            breeding: None,
        }
    }

    fn dog_location(key: &str) -> TreeLocation {
        TreeLocation::parse(&format!("ourDogs.packOfPaws.{key}")).expect("location")
    }

    #[test]
    fn push_location_writes_kebab_hash_and_clears_on_none() {
        let location = MemoryLocationService::default();
        let host = DesktopHostContext::new(HostServices::memory(
            MemoryDogProfileService::default(),
            location.clone(),
        ));

        host.push_location(Some(
            &TreeLocation::parse("ourKennel.aboutUs").expect("location"),
        ));
        host.push_location(None);

        assert_eq!(location.history(), vec!["#our-kennel#about-us", ""]);
        assert_eq!(host.current_hash(), "");
        assert_eq!(host.host_strategy_name(), "headless");
    }

    #[test]
    fn profile_fetch_uses_last_key_as_slug() {
        let dogs = MemoryDogProfileService::default();
        dogs.insert("example", profile("Example"));

        let action = block_on(fetch_dog_profile(&dogs, WindowId(3), dog_location("example")));

        assert_eq!(
            action,
            DesktopAction::DogProfileLoaded {
                window_id: WindowId(3),
                location: dog_location("example"),
                result: Ok(profile("Example")),
            }
        );
    }

    #[test]
    fn missing_profile_is_reported_as_not_found() {
        let dogs = MemoryDogProfileService::default();

        let action = block_on(fetch_dog_profile(&dogs, WindowId(1), dog_location("dogB")));

        let DesktopAction::DogProfileLoaded { result, .. } = action else {
            panic!("expected a profile completion");
        };
        assert_eq!(result, Err(DogProfileError::NotFound));
    }

    #[test]
    fn native_viewport_scale_is_identity() {
        let host = DesktopHostContext::new(HostServices::noop());
        assert_eq!(host.viewport_scale(), 1.0);
    }
}
