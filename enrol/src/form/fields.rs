//! Editable field state.
//!
//! Plain structs mutated in place by the session. Every field carries
//! an error slot; edits auto-clear it so stale messages never outlive
//! the input they described.

use crate::country::CountryOption;

/// Mask character for hidden secret fields.
const MASK: char = '•';

/// A single-line text field with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in characters, 0..=len.
    cursor: usize,
    placeholder: String,
    error: Option<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        // Auto-clear error on value change
        self.error = None;
    }

    /// Empties the field and its error.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte, c);
        self.cursor += 1;
        self.error = None;
    }

    /// Deletes the character before the cursor. Returns whether the
    /// content changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = char_to_byte_index(&self.value, self.cursor - 1);
        self.value.remove(byte);
        self.cursor -= 1;
        self.error = None;
        true
    }

    /// Deletes the character under the cursor. Returns whether the
    /// content changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte);
        self.error = None;
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.value.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

/// A text field whose content renders masked until revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretField {
    text: TextField,
    revealed: bool,
}

impl SecretField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            text: TextField::with_placeholder(placeholder),
            revealed: false,
        }
    }

    /// The underlying text field (value, cursor, error).
    pub fn text(&self) -> &TextField {
        &self.text
    }

    /// Mutable access for editing; the session routes keys here.
    pub fn text_mut(&mut self) -> &mut TextField {
        &mut self.text
    }

    pub fn value(&self) -> &str {
        self.text.value()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Text to draw: the raw value when revealed, one mask character
    /// per character otherwise.
    pub fn display_text(&self) -> String {
        if self.revealed {
            self.text.value().to_string()
        } else {
            self.text.value().chars().map(|_| MASK).collect()
        }
    }

    /// Empties the field and hides it again.
    pub fn clear(&mut self) {
        self.text.clear();
        self.revealed = false;
    }
}

/// Mutually exclusive labeled options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioField {
    options: Vec<String>,
    selected: Option<usize>,
    error: Option<String>,
}

impl RadioField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            error: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Selects by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
            // Auto-clear error on value change
            self.error = None;
        }
    }

    /// Moves selection down, wrapping. Starts at the first option when
    /// nothing is selected.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 >= self.options.len() => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.select(next);
    }

    /// Moves selection up, wrapping.
    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let prev = match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        };
        self.select(prev);
    }

    /// Drops the selection and the error.
    pub fn clear(&mut self) {
        self.selected = None;
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Option-list selector over `{value, label}` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectField {
    options: Vec<CountryOption>,
    selected: Option<usize>,
    placeholder: String,
    error: Option<String>,
}

impl SelectField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &[CountryOption]) -> Self {
        Self {
            options: options.to_vec(),
            selected: None,
            placeholder: String::new(),
            error: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&CountryOption> {
        self.selected.map(|i| &self.options[i])
    }

    /// The selected option's value code.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(|o| o.value)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_option().map(|o| o.label)
    }

    /// Selects by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
            // Auto-clear error on value change
            self.error = None;
        }
    }

    /// Selects the option with the given value code, if present.
    pub fn select_value(&mut self, value: &str) {
        if let Some(index) = self.options.iter().position(|o| o.value == value) {
            self.select(index);
        }
    }

    /// Moves selection down, wrapping.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 >= self.options.len() => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.select(next);
    }

    /// Moves selection up, wrapping.
    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let prev = match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        };
        self.select(prev);
    }

    /// Jumps to the next option whose label starts with `c`, scanning
    /// forward from the current selection and wrapping. Case
    /// insensitive. Returns whether the selection moved.
    pub fn select_by_letter(&mut self, c: char) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let wanted = c.to_ascii_lowercase();
        let start = self.selected.map(|i| i + 1).unwrap_or(0);
        for offset in 0..self.options.len() {
            let index = (start + offset) % self.options.len();
            let starts_with = self.options[index]
                .label
                .chars()
                .next()
                .is_some_and(|first| first.to_ascii_lowercase() == wanted);
            if starts_with {
                self.select(index);
                return true;
            }
        }
        false
    }

    /// Drops the selection and the error.
    pub fn clear(&mut self) {
        self.selected = None;
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_multibyte_editing() {
        let mut field = TextField::new();
        field.insert_char('é');
        field.insert_char('b');
        assert_eq!(field.value(), "éb");
        assert_eq!(field.cursor(), 2);

        field.cursor_left();
        field.cursor_left();
        field.insert_char('a');
        assert_eq!(field.value(), "aéb");

        field.cursor_right();
        assert!(field.delete_back());
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_delete_at_boundaries() {
        let mut field = TextField::new();
        assert!(!field.delete_back());
        assert!(!field.delete_forward());

        field.set_value("x");
        field.cursor_home();
        assert!(!field.delete_back());
        assert!(field.delete_forward());
        assert!(field.is_empty());
    }

    #[test]
    fn test_secret_mask_length_matches_chars() {
        let mut field = SecretField::new();
        field.text_mut().set_value("pässword");
        assert_eq!(field.display_text().chars().count(), 8);
        field.toggle_reveal();
        assert_eq!(field.display_text(), "pässword");
    }

    #[test]
    fn test_select_by_letter_wraps() {
        let options = [
            CountryOption { value: "FR", label: "France" },
            CountryOption { value: "DE", label: "Germany" },
            CountryOption { value: "GR", label: "Greece" },
        ];
        let mut select = SelectField::with_options(&options);
        assert!(select.select_by_letter('g'));
        assert_eq!(select.selected_label(), Some("Germany"));
        assert!(select.select_by_letter('g'));
        assert_eq!(select.selected_label(), Some("Greece"));
        assert!(select.select_by_letter('f'));
        assert_eq!(select.selected_label(), Some("France"));
        assert!(!select.select_by_letter('z'));
    }
}
