use std::time::Duration;

use system_ui::{Taskbar as TaskbarFrame, TaskbarButton, TaskbarSection};

use super::{menus::NavStrip, *};
use crate::model::{DesktopState, WindowId, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

fn taskbar_window_button_dom_id(window_id: WindowId) -> String {
    format!("taskbar-window-button-{}", window_id.0)
}

/// Taskbar entries in opening order, independent of the stacking order.
fn ordered_taskbar_windows(desktop: &DesktopState) -> Vec<WindowRecord> {
    let mut windows = desktop.windows.clone();
    windows.sort_by_key(|win| win.id);
    windows
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        let desktop = state.get_untracked();
        if desktop.start_menu_open || desktop.open_nav_menu.is_some() {
            runtime.dispatch_action(DesktopAction::CloseMenus);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <div class="taskbar-host" on:mousedown=move |ev| ev.stop_propagation()>
            <TaskbarFrame aria_label="Desktop taskbar">
                <TaskbarSection ui_slot="start">
                    <TaskbarButton
                        id="taskbar-start-button"
                        ui_slot="start-button"
                        aria_controls="desktop-start-menu"
                        aria_haspopup="menu"
                        aria_expanded=Signal::derive(move || state.get().start_menu_open)
                        pressed=Signal::derive(move || state.get().start_menu_open)
                        title="Start"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                        })
                    >
                        <span class="taskbar-glyph" aria-hidden="true">"🐾"</span>
                        <span>"Start"</span>
                    </TaskbarButton>
                </TaskbarSection>

                <TaskbarSection ui_slot="navigation" aria_label="Site navigation">
                    <NavStrip />
                </TaskbarSection>

                <TaskbarSection ui_slot="running" aria_label="Open windows">
                    <For
                        each=move || ordered_taskbar_windows(&state.get())
                        key=|win| win.id.0
                        let:win
                    >
                        {{
                            let window_id = win.id;
                            let active = Signal::derive(move || {
                                state
                                    .get()
                                    .window(window_id)
                                    .map(|win| win.is_focused && !win.minimized)
                                    .unwrap_or(false)
                            });
                            let title = Signal::derive(move || {
                                state
                                    .get()
                                    .window(window_id)
                                    .map(|win| win.title.clone())
                                    .unwrap_or_default()
                            });
                            let icon = move || {
                                state
                                    .get()
                                    .window(window_id)
                                    .map(|win| win.icon.clone())
                                    .unwrap_or_default()
                            };
                            view! {
                                <TaskbarButton
                                    id=taskbar_window_button_dom_id(window_id)
                                    ui_slot="window-button"
                                    aria_controls=window_id.dom_id()
                                    title=title
                                    selected=active
                                    pressed=active
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::CloseMenus);
                                        runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                            window_id,
                                        });
                                    })
                                >
                                    <span class="taskbar-app-icon" aria-hidden="true">{icon}</span>
                                    <span class="taskbar-window-title">{move || title.get()}</span>
                                </TaskbarButton>
                            }
                        }}
                    </For>
                </TaskbarSection>

                <TaskbarSection ui_slot="tray">
                    <time class="taskbar-clock" id="clock">
                        {move || format_clock(clock_now.get())}
                    </time>
                </TaskbarSection>
            </TaskbarFrame>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        content::ContentCatalog,
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    #[test]
    fn clock_is_zero_padded_hours_and_minutes() {
        assert_eq!(format_clock(ClockSnapshot { hour: 9, minute: 5 }), "09:05");
        assert_eq!(format_clock(ClockSnapshot { hour: 23, minute: 59 }), "23:59");
    }

    #[test]
    fn taskbar_keeps_opening_order_when_focus_changes() {
        let mut desktop = DesktopState::from_catalog(ContentCatalog::builtin());
        let mut interaction = InteractionState::default();
        for path in ["ourKennel", "ourDogs", "photoGallery"] {
            reduce_desktop(
                &mut desktop,
                &mut interaction,
                DesktopAction::OpenPath {
                    path: path.to_string(),
                },
            )
            .expect("open");
        }
        reduce_desktop(
            &mut desktop,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: WindowId(1),
            },
        )
        .expect("focus");

        let ids: Vec<u64> = ordered_taskbar_windows(&desktop)
            .iter()
            .map(|win| win.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(desktop.windows.last().map(|win| win.id), Some(WindowId(1)));
        assert_eq!(taskbar_window_button_dom_id(WindowId(2)), "taskbar-window-button-2");
    }
}
