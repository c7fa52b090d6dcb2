use crate::shared::theme::use_theme;
use form_contracts::form::{ChoiceGroup, ChoiceItem};
use leptos::prelude::*;

/// Checkbox wrapped in its label.
#[component]
pub fn Checkbox(item: ChoiceItem) -> impl IntoView {
    let theme = use_theme();
    let label_for = item.dom_id.clone();
    let input_id = item.dom_id;

    view! {
        <label class=move || theme.class("checkbox-label") for=label_for>
            <input
                id=input_id
                type="checkbox"
                class="checkbox-input"
                name=item.name
                value=item.value
                required=item.required
            />
            {item.label}
        </label>
    }
}

/// Independent group: each box has its own name, any subset may be checked.
#[component]
pub fn CheckboxGroup(group: ChoiceGroup) -> impl IntoView {
    view! {
        <div class="checkbox-group">
            {group
                .items
                .into_iter()
                .map(|item| view! { <Checkbox item=item /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::provide_fixed_theme;
    use form_contracts::theme::ThemeMode;

    fn item(index: usize) -> ChoiceItem {
        ChoiceItem {
            dom_id: format!("pick-{index}"),
            name: "pick".to_string(),
            value: format!("v{index}"),
            label: format!("Option {index}"),
            required: false,
        }
    }

    #[test]
    fn test_group_builds_label_and_input_for_each_item() {
        let owner = Owner::new();
        owner.with(|| {
            provide_fixed_theme(ThemeMode::Dark);
            let group = ChoiceGroup {
                items: vec![item(0), item(1)],
            };
            let _view = CheckboxGroup(CheckboxGroupProps::builder().group(group).build());
        });
        owner.cleanup();
    }
}
