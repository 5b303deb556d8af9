use system_ui::{DesktopIconButton, DesktopIconGrid};

use super::*;
use crate::{content::ContentCatalog, model::StickyNote};

fn sticky_style(note: &StickyNote) -> String {
    format!(
        "left:{}px;top:{}px;background-color:{};z-index:{};",
        note.x, note.y, note.color, note.z_index
    )
}

#[component]
pub(super) fn DesktopShortcuts() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <DesktopIconGrid layout_class="desktop-shortcuts">
            {ContentCatalog::builtin()
                .shortcuts
                .iter()
                .enumerate()
                .map(|(idx, shortcut)| {
                    let path = shortcut.path.clone();
                    let icon = shortcut.icon.clone();
                    let title = shortcut.title.clone();
                    view! {
                        <DesktopIconButton
                            layout_class="desktop-shortcut"
                            title=shortcut.title.clone()
                            data_key=shortcut.path.clone()
                            selected=Signal::derive(move || state.get().selected_shortcut == Some(idx))
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                ev.stop_propagation();
                                runtime.dispatch_action(DesktopAction::SelectShortcut {
                                    index: Some(idx),
                                });
                            })
                            on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::OpenPath {
                                    path: path.clone(),
                                });
                            })
                        >
                            <span class="shortcut-icon" aria-hidden="true">{icon}</span>
                            <span class="shortcut-title">{title}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}

#[component]
pub(super) fn StickyNotes() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div class="sticky-notes" data-ui-slot="sticky-notes">
            <For each=move || state.get().stickies key=|note| note.id let:note>
                {{
                    let id = note.id;
                    let style = move || {
                        state
                            .get()
                            .stickies
                            .iter()
                            .find(|candidate| candidate.id == id)
                            .map(sticky_style)
                            .unwrap_or_default()
                    };
                    view! {
                        <div
                            class="sticky-note"
                            style=style
                            on:mousedown=move |_| {
                                runtime.dispatch_action(DesktopAction::FocusSticky { id });
                            }
                        >
                            <div class="sticky-header">
                                <span class="sticky-title">{note.title.clone()}</span>
                                <button
                                    type="button"
                                    class="sticky-close"
                                    aria-label="Close note"
                                    on:mousedown=move |ev| ev.stop_propagation()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::CloseSticky { id });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                            <div class="sticky-content">{note.content.clone()}</div>
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
