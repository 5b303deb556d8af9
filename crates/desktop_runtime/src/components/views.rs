//! Window bodies: directory listing, notepad and the tabbed dog profile.

use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::DogProfile;
use system_ui::{
    Button, DesktopIconButton, FieldRow, FieldSet, StatusText, Tab, TabList, TabPanel, TextArea,
};

use super::use_desktop_runtime;
use crate::{
    content::ContentCatalog,
    location::TreeLocation,
    model::{ProfileLoad, WindowId},
    reducer::DesktopAction,
};

const NOTEPAD_AUTOSAVE_DELAY: Duration = Duration::from_secs(1);
const PROFILE_LOADING_TEXT: &str = "Loading dog profile...";

#[component]
pub(super) fn FolderView(window_id: WindowId, location: TreeLocation) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_memo(move |_| {
        runtime
            .state
            .get()
            .window(window_id)
            .and_then(|win| win.selected_item.clone())
    });
    let children = ContentCatalog::builtin()
        .resolve(&location)
        .map(|node| node.children.clone())
        .unwrap_or_default();

    if children.is_empty() {
        return view! {
            <div class="folder-view" data-ui-slot="folder-view">
                <StatusText>"This folder is empty."</StatusText>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="folder-view" data-ui-slot="folder-view">
            {children
                .into_iter()
                .map(|child| {
                    let key = child.key.clone();
                    let select_key = child.key.clone();
                    let open_key = child.key.clone();
                    let icon = child.icon.clone();
                    let title = child.title.clone();
                    view! {
                        <DesktopIconButton
                            layout_class="folder-item"
                            title=child.title
                            data_key=child.key
                            data_kind=child.kind.as_str().to_string()
                            selected=Signal::derive(move || {
                                selected.get().as_deref() == Some(key.as_str())
                            })
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::SelectItem {
                                    window_id,
                                    key: Some(select_key.clone()),
                                });
                            })
                            on_dblclick=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenChild {
                                    window_id,
                                    key: open_key.clone(),
                                });
                            })
                        >
                            <span class="folder-icon" aria-hidden="true">{icon}</span>
                            <span class="folder-title">{title}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

/// Text a freshly opened document starts with.
pub(crate) fn notepad_placeholder(title: &str) -> String {
    format!(
        "This is the content of {title}. \nYou can edit this text.\n\nThis file was created in our kennel management system."
    )
}

fn is_manual_save(ctrl: bool, key: &str) -> bool {
    ctrl && key.eq_ignore_ascii_case("s")
}

#[component]
pub(super) fn NotepadView(title: String) -> impl IntoView {
    let text = create_rw_signal(notepad_placeholder(&title));
    let pending_save = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = pending_save.get_value() {
            handle.clear();
        }
    });

    let on_input = Callback::new(move |ev: web_sys::Event| {
        text.set(event_target_value(&ev));
        if let Some(handle) = pending_save.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || logging::log!("Content saved: {}", text.get_untracked()),
            NOTEPAD_AUTOSAVE_DELAY,
        )
        .ok();
        pending_save.set_value(handle);
    });
    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if is_manual_save(ev.ctrl_key(), &ev.key()) {
            ev.prevent_default();
            logging::log!("Manual save triggered");
        }
    });

    view! {
        <div class="file-content notepad-style">
            <TextArea
                layout_class="notepad-text"
                aria_label=title
                value=text
                on_input=on_input
                on_keydown=on_keydown
            />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Overview,
    Physical,
    Shows,
    Breeding,
}

impl ProfileTab {
    const ALL: [Self; 4] = [Self::Overview, Self::Physical, Self::Shows, Self::Breeding];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Physical => "Physical",
            Self::Shows => "Shows",
            Self::Breeding => "Breeding",
        }
    }

    fn panel_id(self, window_id: WindowId) -> String {
        format!("{}-{}", window_id.dom_id(), self.label().to_ascii_lowercase())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn measurement(value: f64, unit: &str) -> String {
    format!("{value} {unit}")
}

#[component]
pub(super) fn ProfileView(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let load = create_memo(move |_| {
        runtime
            .state
            .get()
            .window(window_id)
            .and_then(|win| win.profile.clone())
    });

    view! {
        <div class="file-content profile-style">
            {move || match load.get() {
                None | Some(ProfileLoad::Loading) => {
                    view! {
                        <StatusText layout_class="dog-profile-container" tone="loading">
                            {PROFILE_LOADING_TEXT}
                        </StatusText>
                    }
                        .into_view()
                }
                Some(ProfileLoad::Failed(message)) => {
                    view! {
                        <StatusText layout_class="dog-profile-container" tone="error">
                            {message}
                        </StatusText>
                    }
                        .into_view()
                }
                Some(ProfileLoad::Loaded(profile)) => {
                    view! { <DogProfileTabs window_id=window_id profile=profile /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn DogProfileTabs(window_id: WindowId, profile: DogProfile) -> impl IntoView {
    let active = create_rw_signal(ProfileTab::Overview);
    let selected = move |tab: ProfileTab| Signal::derive(move || active.get() == tab);

    // Each panel owns its text so no child closure borrows `profile`.
    let tab_list_label = format!("{} profile", profile.name);
    let description = profile.description_or_placeholder().to_string();
    let weight = measurement(profile.weight, "kg");
    let height = measurement(profile.height, "cm");
    let health_tests = profile.health_tests.join(", ");
    let vaccinated = yes_no(profile.vaccinations_up_to_date);
    let dna_tests = profile.dna_tests.join(", ");
    let DogProfile {
        name,
        breed,
        date_of_birth,
        registration,
        color,
        show_results,
        breeding,
        ..
    } = profile;

    view! {
        <div class="dog-profile">
            <TabList aria_label=tab_list_label>
                {ProfileTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab
                                controls=tab.panel_id(window_id)
                                selected=selected(tab)
                                on_click=Callback::new(move |_| active.set(tab))
                            >
                                {tab.label()}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>

            <TabPanel id=ProfileTab::Overview.panel_id(window_id) selected=selected(ProfileTab::Overview)>
                <div class="profile-heading">
                    <h4>{name}</h4>
                    <p>{breed}</p>
                </div>
                <FieldSet legend="Basic Information">
                    <FieldRow label="Born">{date_of_birth}</FieldRow>
                    <FieldRow label="Registration">{registration}</FieldRow>
                    <FieldRow>
                        <p class="profile-description">{description}</p>
                    </FieldRow>
                </FieldSet>
            </TabPanel>

            <TabPanel id=ProfileTab::Physical.panel_id(window_id) selected=selected(ProfileTab::Physical)>
                <FieldSet legend="Physical Characteristics">
                    <FieldRow label="Color">{color}</FieldRow>
                    <FieldRow label="Weight">{weight}</FieldRow>
                    <FieldRow label="Height">{height}</FieldRow>
                </FieldSet>
                <FieldSet legend="Health Information">
                    <FieldRow label="Health Tests">{health_tests}</FieldRow>
                    <FieldRow label="Vaccinations Up to Date">{vaccinated}</FieldRow>
                </FieldSet>
            </TabPanel>

            <TabPanel id=ProfileTab::Shows.panel_id(window_id) selected=selected(ProfileTab::Shows)>
                <FieldSet legend="Show Results">
                    {show_results
                        .into_iter()
                        .map(|result| {
                            view! { <FieldRow label=result.show>{result.achievement}</FieldRow> }
                        })
                        .collect_view()}
                </FieldSet>
            </TabPanel>

            <TabPanel id=ProfileTab::Breeding.panel_id(window_id) selected=selected(ProfileTab::Breeding)>
                <FieldSet legend="Breeding Information">
                    <FieldRow label="DNA Tests">{dna_tests}</FieldRow>
                    {breeding
                        .map(|breeding| {
                            view! {
                                <FieldRow label="Available for Breeding">
                                    {yes_no(breeding.available)}
                                </FieldRow>
                                <FieldRow label="Previous Litters">
                                    {breeding.previous_litters}
                                </FieldRow>
                            }
                        })}
                </FieldSet>
            </TabPanel>

            <section class="profile-actions">
                <Button>"OK"</Button>
                <Button>"Cancel"</Button>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notepad_starts_with_the_document_blurb() {
        assert_eq!(
            notepad_placeholder("Our Story"),
            "This is the content of Our Story. \nYou can edit this text.\n\nThis file was created in our kennel management system."
        );
    }

    #[test]
    fn ctrl_s_triggers_a_manual_save() {
        assert!(is_manual_save(true, "s"));
        assert!(is_manual_save(true, "S"));
        assert!(!is_manual_save(false, "s"));
        assert!(!is_manual_save(true, "a"));
    }

    #[test]
    fn profile_tab_panels_are_scoped_to_the_window() {
        assert_eq!(ProfileTab::Shows.panel_id(WindowId(7)), "window-7-shows");
        let labels: Vec<&str> = ProfileTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, vec!["Overview", "Physical", "Shows", "Breeding"]);
    }

    #[test]
    fn measurements_drop_trailing_zero_fractions() {
        assert_eq!(measurement(18.0, "kg"), "18 kg");
        assert_eq!(measurement(22.5, "cm"), "22.5 cm");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
