use std::rc::Rc;

use platform_host::{
    DogProfile, DogProfileError, DogProfileFuture, DogProfileService, HostServices, HostStrategy,
    LocationService, NoopDogProfileService, NoopLocationService,
};

use crate::{WebDogProfileService, WebLocationService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete dog-profile backend behind [`DogProfileService`].
#[derive(Debug, Clone, Copy)]
pub enum DogProfileServiceAdapter {
    /// Browser `fetch`-backed lookup.
    Browser(WebDogProfileService),
    /// Lookup that reports every profile as missing.
    Headless(NoopDogProfileService),
}

impl DogProfileService for DogProfileServiceAdapter {
    fn load_profile<'a>(
        &'a self,
        slug: &'a str,
    ) -> DogProfileFuture<'a, Result<DogProfile, DogProfileError>> {
        match self {
            Self::Browser(service) => service.load_profile(slug),
            Self::Headless(service) => service.load_profile(slug),
        }
    }
}

/// Adapter enum that erases the concrete location backend behind [`LocationService`].
#[derive(Debug, Clone, Copy)]
pub enum LocationServiceAdapter {
    /// `window.location` / `window.history` backed location.
    Browser(WebLocationService),
    /// Location without a document.
    Headless(NoopLocationService),
}

impl LocationService for LocationServiceAdapter {
    fn current_hash(&self) -> String {
        match self {
            Self::Browser(service) => service.current_hash(),
            Self::Headless(service) => service.current_hash(),
        }
    }

    fn push_hash(&self, hash: Option<&str>) {
        match self {
            Self::Browser(service) => service.push_hash(hash),
            Self::Headless(service) => service.push_hash(hash),
        }
    }
}

/// Builds the dog-profile service for the selected strategy.
pub fn dog_profile_service() -> DogProfileServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DogProfileServiceAdapter::Browser(WebDogProfileService),
        HostStrategy::Headless => DogProfileServiceAdapter::Headless(NoopDogProfileService),
    }
}

/// Builds the location service for the selected strategy.
pub fn location_service() -> LocationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => LocationServiceAdapter::Browser(WebLocationService),
        HostStrategy::Headless => LocationServiceAdapter::Headless(NoopLocationService),
    }
}

/// Assembles the host bundle injected into `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        dogs: Rc::new(dog_profile_service()),
        location: Rc::new(location_service()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(
            dog_profile_service(),
            DogProfileServiceAdapter::Browser(_)
        ));
        assert!(matches!(
            location_service(),
            LocationServiceAdapter::Browser(_)
        ));
        assert_eq!(build_host_services().host_strategy, HostStrategy::Browser);
    }
}
