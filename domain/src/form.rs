use shared::utils::is_blank;
use std::collections::HashMap;

pub const ERROR_BORDER: &str = "#dc3545";
pub const NORMAL_BORDER: &str = "#e1e5e9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldHighlight {
    #[default]
    Normal,
    Error,
}

impl FieldHighlight {
    pub fn border_color(self) -> &'static str {
        match self {
            FieldHighlight::Normal => NORMAL_BORDER,
            FieldHighlight::Error => ERROR_BORDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub highlight: FieldHighlight,
}

impl FormField {
    pub fn required(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            required: true,
            highlight: FieldHighlight::Normal,
        }
    }

    pub fn optional(name: &str, value: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name, value)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn flagged(&self) -> impl Iterator<Item = &FormField> {
        self.fields
            .iter()
            .filter(|f| f.highlight == FieldHighlight::Error)
    }

    /// Check every required field and re-highlight it. Every field is
    /// visited, so all blanks are flagged in one pass.
    pub fn validate_required(&mut self) -> bool {
        let mut valid = true;
        for field in self.fields.iter_mut().filter(|f| f.required) {
            if is_blank(&field.value) {
                field.highlight = FieldHighlight::Error;
                valid = false;
            } else {
                field.highlight = FieldHighlight::Normal;
            }
        }
        valid
    }
}

/// Forms addressable by id.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: HashMap<String, Form>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, form: Form) {
        self.forms.insert(id.into(), form);
    }

    pub fn get(&self, id: &str) -> Option<&Form> {
        self.forms.get(id)
    }

    /// `false` for an unknown form id.
    pub fn validate_required_fields(&mut self, form_id: &str) -> bool {
        match self.forms.get_mut(form_id) {
            Some(form) => form.validate_required(),
            None => false,
        }
    }
}
