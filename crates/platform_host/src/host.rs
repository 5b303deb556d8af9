//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    DogProfileService, LocationService, MemoryDogProfileService, MemoryLocationService,
    NoopDogProfileService, NoopLocationService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition with in-memory or no-op adapters (tests, native builds).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Service selection happens before this bundle crosses into `desktop_runtime`, which keeps the
/// runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Dog profile document lookup.
    pub dogs: Rc<dyn DogProfileService>,
    /// Location hash and history access.
    pub location: Rc<dyn LocationService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a headless bundle whose services do nothing.
    pub fn noop() -> Self {
        Self {
            dogs: Rc::new(NoopDogProfileService),
            location: Rc::new(NoopLocationService),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Builds a headless bundle over the supplied in-memory adapters.
    pub fn memory(dogs: MemoryDogProfileService, location: MemoryLocationService) -> Self {
        Self {
            dogs: Rc::new(dogs),
            location: Rc::new(location),
            host_strategy: HostStrategy::Headless,
        }
    }
}
