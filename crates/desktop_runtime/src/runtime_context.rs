//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and the browser
//! listeners that feed the reducer (hash changes, viewport resizes). UI composition stays in
//! [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    content::ContentCatalog,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    install_viewport_tracking(runtime);
    install_hash_routing(runtime);
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let refresh_scale = move || {
        let scale = runtime.host.get_value().viewport_scale();
        runtime.dispatch_action(DesktopAction::SetViewportScale { scale });
    };
    refresh_scale();

    let resize_listener = window_event_listener(ev::resize, move |_| refresh_scale());
    on_cleanup(move || resize_listener.remove());
}

// Deep links on load behave exactly like a later hash change.
fn install_hash_routing(runtime: DesktopRuntimeContext) {
    let hash_listener = window_event_listener(ev::hashchange, move |_| {
        let hash = runtime.host.get_value().current_hash();
        runtime.dispatch_action(DesktopAction::HashChanged { hash });
    });
    on_cleanup(move || hash_listener.remove());

    let hash = runtime.host.get_value().current_hash();
    runtime.dispatch_action(DesktopAction::HashChanged { hash });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens the deep-linked window.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::from_catalog(ContentCatalog::builtin()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    logging::log!(
        "desktop runtime ready ({} host)",
        host.get_value().host_strategy_name()
    );
    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
