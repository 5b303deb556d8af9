//! Drains reducer-emitted [`RuntimeEffect`](crate::reducer::RuntimeEffect) values against the host.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Runs queued URL pushes and profile fetches in emission order whenever the queue fills.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // A finished profile fetch dispatches `DogProfileLoaded`; anything that produces lands
        // in the next batch, not this one.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
