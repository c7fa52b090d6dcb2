use super::control::{
    ChoiceGroup, ChoiceItem, FieldControl, FileControl, InputControl, SelectControl,
    TextAreaControl,
};
use crate::config::PreviewConfig;
use crate::schema::{normalize_option, ChoiceOption, Field, FieldType, FormSchema};
use serde_json::Value;

/// Everything the previewer renders for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPlan {
    pub title: String,
    pub description: String,
    /// Only fields with a supported type, in schema order.
    pub fields: Vec<FieldPlan>,
}

impl FormPlan {
    pub fn build(schema: &FormSchema, config: &PreviewConfig) -> Self {
        Self {
            title: schema.title.clone(),
            description: schema.description.clone(),
            fields: schema
                .fields
                .iter()
                .filter_map(|field| plan_field(field, config))
                .collect(),
        }
    }

    /// Narrow and plan in one step; `None` when the value is not an object.
    pub fn from_value(value: &Value, config: &PreviewConfig) -> Option<Self> {
        FormSchema::from_value(value).map(|schema| Self::build(&schema, config))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A labelled control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    pub id: String,
    pub label: String,
    pub control: FieldControl,
}

/// Pick the control for a field. Unsupported types yield `None`.
pub fn plan_field(field: &Field, config: &PreviewConfig) -> Option<FieldPlan> {
    let control = match &field.field_type {
        FieldType::Text => FieldControl::Input(input(field, "text")),
        FieldType::Email => FieldControl::Input(input(field, "email")),
        FieldType::Password => FieldControl::Input(input(field, "password")),
        FieldType::Tel => {
            let rules = field.validation.clone().unwrap_or_default();
            FieldControl::Input(InputControl {
                pattern: rules.pattern,
                title: rules.message,
                ..input(field, "tel")
            })
        }
        FieldType::Textarea => FieldControl::TextArea(TextAreaControl {
            id: field.id.clone(),
            placeholder: field.placeholder.clone(),
            required: field.required,
        }),
        FieldType::Select => FieldControl::Select(SelectControl {
            id: field.id.clone(),
            name: field.id.clone(),
            required: field.required,
            options: indexed_options(field).map(|(_, option)| option).collect(),
        }),
        FieldType::Radio => FieldControl::RadioGroup(ChoiceGroup {
            items: indexed_options(field)
                .map(|(index, option)| ChoiceItem {
                    dom_id: option_dom_id(&field.id, index),
                    name: field.id.clone(),
                    value: option.value,
                    label: option.label,
                    required: field.required,
                })
                .collect(),
        }),
        FieldType::Checkbox => FieldControl::CheckboxGroup(ChoiceGroup {
            items: indexed_options(field)
                .map(|(index, option)| {
                    let dom_id = option_dom_id(&field.id, index);
                    ChoiceItem {
                        name: dom_id.clone(),
                        dom_id,
                        value: option.value,
                        label: option.label,
                        // A required checkbox would force every box in the group.
                        required: false,
                    }
                })
                .collect(),
        }),
        FieldType::File => FieldControl::File(FileControl {
            id: field.id.clone(),
            name: field.id.clone(),
            accept: field
                .accept
                .clone()
                .filter(|accept| !accept.is_empty())
                .unwrap_or_else(|| config.default_file_accept.to_string()),
            required: field.required,
        }),
        FieldType::Unsupported(kind) => {
            log::debug!("skipping field '{}' with unsupported type '{}'", field.id, kind);
            return None;
        }
    };

    Some(FieldPlan {
        id: field.id.clone(),
        label: field.label.clone(),
        control,
    })
}

fn input(field: &Field, input_type: &'static str) -> InputControl {
    InputControl {
        id: field.id.clone(),
        input_type,
        placeholder: field.placeholder.clone(),
        required: field.required,
        pattern: None,
        title: None,
    }
}

/// Normalized options paired with their position in the raw array, so DOM
/// ids stay stable when an invalid entry in the middle is skipped.
fn indexed_options(field: &Field) -> impl Iterator<Item = (usize, ChoiceOption)> + '_ {
    field
        .options
        .iter()
        .enumerate()
        .filter_map(move |(index, raw)| match normalize_option(raw) {
            Some(option) => Some((index, option)),
            None => {
                log::debug!("skipping option #{} of field '{}'", index, field.id);
                None
            }
        })
}

fn option_dom_id(field_id: &str, index: usize) -> String {
    format!("{}-{}", field_id, index)
}
