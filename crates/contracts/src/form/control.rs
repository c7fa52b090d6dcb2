//! Control descriptions, one variant per native element family

use crate::schema::ChoiceOption;

/// Concrete control chosen for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    /// `<input>` for text, email, password and tel.
    Input(InputControl),
    TextArea(TextAreaControl),
    Select(SelectControl),
    /// Mutually exclusive: every item shares one `name`.
    RadioGroup(ChoiceGroup),
    /// Independent: every item has its own `name`.
    CheckboxGroup(ChoiceGroup),
    File(FileControl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputControl {
    pub id: String,
    /// Native `type` attribute.
    pub input_type: &'static str,
    pub placeholder: Option<String>,
    pub required: bool,
    pub pattern: Option<String>,
    /// Browser hint for a pattern mismatch.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAreaControl {
    pub id: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    pub id: String,
    pub name: String,
    pub required: bool,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub items: Vec<ChoiceItem>,
}

/// One radio button or checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    /// `${field.id}-${index}`, index of the entry in the raw `options` array.
    pub dom_id: String,
    pub name: String,
    pub value: String,
    pub label: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileControl {
    pub id: String,
    pub name: String,
    pub accept: String,
    pub required: bool,
}
