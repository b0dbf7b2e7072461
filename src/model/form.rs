//! Form state for the user details dialog
//!
//! One named field per input, updated through a `Field` selector so an edit
//! can never touch more than the field it names.

/// Identifies one input of the user details form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Phone,
    Dob,
}

/// What kind of input a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
}

/// Longest value a date input can hold (`YYYY-MM-DD`)
const DATE_INPUT_MAX_LEN: usize = 10;

impl Field {
    /// All fields in display and focus order
    pub fn all() -> [Field; 4] {
        [Field::Username, Field::Email, Field::Phone, Field::Dob]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Dob => "Date of Birth",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Field::Username | Field::Phone => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Dob => InputKind::Date,
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self.input_kind() {
            InputKind::Date => "YYYY-MM-DD",
            InputKind::Email => "name@example.com",
            InputKind::Text => "",
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Field::Username => Field::Email,
            Field::Email => Field::Phone,
            Field::Phone => Field::Dob,
            Field::Dob => Field::Username,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Username => Field::Dob,
            Field::Email => Field::Username,
            Field::Phone => Field::Email,
            Field::Dob => Field::Phone,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Field::Username => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Dob => 3,
        }
    }
}

impl InputKind {
    /// Whether a typed character is accepted by this kind of input
    ///
    /// Date inputs only take the characters a date picker would produce.
    pub fn accepts(&self, current: &str, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            InputKind::Text | InputKind::Email => true,
            InputKind::Date => {
                (c.is_ascii_digit() || c == '-')
                    && current.chars().count() < DATE_INPUT_MAX_LEN
            }
        }
    }
}

/// A single edit applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
}

/// The four values collected by the dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Dob => &self.dob,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Dob => &mut self.dob,
        }
    }

    /// Apply a keystroke-level edit to one field
    ///
    /// Returns `false` when the input kind rejected the edit.
    pub fn edit(&mut self, field: Field, edit: FieldEdit) -> bool {
        let kind = field.input_kind();
        let slot = self.slot_mut(field);
        match edit {
            FieldEdit::Insert(c) => {
                if !kind.accepts(slot, c) {
                    return false;
                }
                slot.push(c);
            }
            FieldEdit::Backspace => {
                slot.pop();
            }
        }
        true
    }

    /// True when no field is empty
    pub fn is_complete(&self) -> bool {
        Field::all().iter().all(|f| !self.get(*f).is_empty())
    }
}

#[cfg(test)]
impl FormState {
    /// Replace the value of one field, leaving the others untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }
}
