use super::*;
use system_ui::{
    Button, ButtonVariant, MenuBar, MenuBarItem, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::views::{FolderView, NotepadView, ProfileView};
use crate::{
    content::ContentCatalog,
    location::TreeLocation,
    model::{WindowId, WindowView},
};

const DISABLED_MENU_ITEMS: [&str; 6] = ["File", "Edit", "View", "Favorites", "Tools", "Help"];

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    // Only a location or view change rebuilds the body; drags and focus changes do not.
    let content = create_memo(move |_| {
        window
            .get()
            .map(|win| (win.location, win.view, win.title))
    });

    let flag = move |read: fn(&crate::model::WindowRecord) -> bool| {
        Signal::derive(move || window.get().as_ref().map(read).unwrap_or(false))
    };
    let focused = flag(|win| win.is_focused);
    let minimized = flag(|win| win.minimized);
    let maximized = flag(|win| win.maximized);
    let title = Signal::derive(move || window.get().map(|win| win.title).unwrap_or_default());
    let icon = move || window.get().map(|win| win.icon).unwrap_or_default();
    let style = Signal::derive(move || {
        window
            .get()
            .map(|win| window_style(win.rect, win.z_index))
            .unwrap_or_default()
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let should_focus = window
            .get_untracked()
            .map(|win| !win.is_focused || win.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });

    view! {
        <WindowFrame
            id=window_id.dom_id()
            style=style
            aria_label=title
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowTitle>
                    <span class="titlebar-app-icon" aria-hidden="true">{icon}</span>
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        action="minimize"
                        aria_label="Minimize"
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    >
                        "_"
                    </WindowControlButton>
                    <WindowControlButton
                        action="maximize"
                        aria_label=Signal::derive(move || {
                            if maximized.get() { "Restore" } else { "Maximize" }.to_string()
                        })
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
                        })
                    >
                        "□"
                    </WindowControlButton>
                    <WindowControlButton
                        action="close"
                        aria_label="Close"
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    >
                        "×"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            {move || {
                let Some((location, view, title)) = content.get() else {
                    return ().into_view();
                };
                match view {
                    WindowView::Folder => {
                        view! {
                            <AddressBar window_id=window_id location=location.clone() />
                            <WindowBody>
                                <FolderView window_id=window_id location=location />
                            </WindowBody>
                        }
                            .into_view()
                    }
                    WindowView::Notepad => {
                        view! {
                            <DisabledMenuBar />
                            <WindowBody>
                                <NotepadView title=title />
                            </WindowBody>
                        }
                            .into_view()
                    }
                    WindowView::Profile => {
                        view! {
                            <DisabledMenuBar />
                            <WindowBody>
                                <ProfileView window_id=window_id />
                            </WindowBody>
                        }
                            .into_view()
                    }
                }
            }}
        </WindowFrame>
    }
}

#[component]
fn DisabledMenuBar() -> impl IntoView {
    view! {
        <MenuBar layout_class="window-menu-bar">
            {DISABLED_MENU_ITEMS
                .into_iter()
                .map(|label| view! { <MenuBarItem disabled=true>{label}</MenuBarItem> })
                .collect_view()}
        </MenuBar>
    }
}

#[component]
fn AddressBar(window_id: WindowId, location: TreeLocation) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let crumbs = ContentCatalog::builtin().breadcrumbs(&location);
    let at_root = location.is_root();

    view! {
        <div class="address-bar" data-ui-slot="address-bar">
            <span class="address-label">"Address"</span>
            <div class="address-content">
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let target = crumb.location;
                        view! {
                            {(idx > 0)
                                .then(|| {
                                    view! {
                                        <span class="address-separator" aria-hidden="true">
                                            "›"
                                        </span>
                                    }
                                })}
                            <button
                                type="button"
                                class="address-segment"
                                on:click=move |_| {
                                    runtime
                                        .dispatch_action(DesktopAction::NavigateTo {
                                            window_id,
                                            location: target.clone(),
                                        });
                                }
                            >
                                <span aria-hidden="true">{crumb.icon}</span>
                                {crumb.title}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Button
                variant=ButtonVariant::Quiet
                aria_label="Up one level"
                title="Up"
                disabled=at_root
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(DesktopAction::NavigateUp { window_id });
                })
            >
                "⬆"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                aria_label="Refresh"
                title="Refresh"
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(DesktopAction::Refresh { window_id });
                })
            >
                "⟳"
            </Button>
        </div>
    }
}
