use super::file_field::FileField;
use crate::shared::components::ui::{CheckboxGroup, Input, RadioGroup, Select, Textarea};
use crate::shared::theme::use_theme;
use form_contracts::form::{FieldControl, FieldPlan};
use leptos::prelude::*;

/// One labelled field: picks the widget for the planned control.
#[component]
pub fn FieldView(plan: FieldPlan) -> impl IntoView {
    let theme = use_theme();
    let FieldPlan { id, label, control } = plan;

    let widget = match control {
        FieldControl::Input(control) => view! { <Input control=control /> }.into_any(),
        FieldControl::TextArea(control) => view! { <Textarea control=control /> }.into_any(),
        FieldControl::Select(control) => view! { <Select control=control /> }.into_any(),
        FieldControl::RadioGroup(group) => view! { <RadioGroup group=group /> }.into_any(),
        FieldControl::CheckboxGroup(group) => view! { <CheckboxGroup group=group /> }.into_any(),
        FieldControl::File(control) => view! { <FileField control=control /> }.into_any(),
    };

    view! {
        <div class="form-field">
            <label for=id class=move || theme.class("field-label")>
                {label}
            </label>
            {widget}
        </div>
    }
}
