use super::*;

#[component]
/// Bevelled fieldset with a legend.
pub fn FieldSet(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] legend: String,
    children: Children,
) -> impl IntoView {
    view! {
        <fieldset
            class=merge_layout_class("ui-fieldset", layout_class)
            data-ui-primitive="true"
            data-ui-kind="fieldset"
        >
            <legend>{legend}</legend>
            {children()}
        </fieldset>
    }
}

#[component]
/// Label/value row inside a fieldset. Without a label the row only carries its children.
pub fn FieldRow(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-field-row", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-row"
        >
            {label.map(|label| view! { <label>{format!("{label}:")}</label> })}
            {children()}
        </div>
    }
}

#[component]
/// Centered status message (loading, empty, error).
pub fn StatusText(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] tone: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-status-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="status-text"
            data-ui-tone=tone.unwrap_or("neutral")
        >
            {children()}
        </div>
    }
}
