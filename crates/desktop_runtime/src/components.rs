//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod desktop_items;
mod menus;
mod taskbar;
mod views;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{
    desktop_items::{DesktopShortcuts, StickyNotes},
    menus::StartMenu,
    taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{
    model::{PointerPosition, WindowRect, DESKTOP_HEIGHT, DESKTOP_WIDTH},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell inside the scaled viewport wrapper.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let desktop = state.get_untracked();
        if desktop.start_menu_open || desktop.open_nav_menu.is_some() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseMenus);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            class="desktop-viewport"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopRoot
                id="desktop-shell-root"
                style=Signal::derive(move || desktop_surface_style(state.get().viewport_scale))
            >
                <Taskbar />
                <StartMenu />
                <DesktopBackdrop>
                    <DesktopShortcuts />
                    <StickyNotes />
                    <DesktopWindowLayer>
                        <For each=move || state.get().windows key=|win| win.id.0 let:win>
                            <DesktopWindow window_id=win.id />
                        </For>
                    </DesktopWindowLayer>
                </DesktopBackdrop>
            </DesktopRoot>
        </div>
    }
}

fn desktop_surface_style(scale: f64) -> String {
    format!(
        "width:{DESKTOP_WIDTH}px;height:{DESKTOP_HEIGHT}px;transform:scale({scale});transform-origin:0 0;"
    )
}

fn window_style(rect: WindowRect, z_index: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    )
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn surface_style_scales_the_logical_desktop() {
        assert_eq!(
            desktop_surface_style(0.5),
            "width:1024px;height:800px;transform:scale(0.5);transform-origin:0 0;"
        );
    }

    #[test]
    fn window_style_carries_geometry_and_stacking() {
        let rect = WindowRect {
            x: 312,
            y: 250,
            w: 400,
            h: 300,
        };
        assert_eq!(
            window_style(rect, 3),
            "left:312px;top:250px;width:400px;height:300px;z-index:3;"
        );
    }
}
