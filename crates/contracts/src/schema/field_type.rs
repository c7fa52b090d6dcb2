//! Field type vocabulary

/// Kind of control a field asks for.
///
/// Matching is exact and case-sensitive; anything outside the vocabulary is
/// kept as `Unsupported` and renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Password,
    Tel,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
    Unsupported(String),
}

impl FieldType {
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "file" => Self::File,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Unsupported(s) => s,
        }
    }

    /// Whether the `options` list of the field is consulted.
    pub fn uses_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }
}
