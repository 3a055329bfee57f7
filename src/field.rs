use std::collections::{BTreeMap, BTreeSet};

/// State class toggled on a field while its value fails validation.
pub const INVALID_STATE_CLASS: &str = "field-invalid";

/// Accessibility attribute set alongside the visual marker.
pub const ARIA_INVALID_ATTR: &str = "aria-invalid";

/// Handle to a form field owned by the UI layer.
///
/// The crate never owns the element behind the handle; it only toggles the
/// invalid-state markers on it. Removing a class or attribute that is not
/// present must be a no-op.
pub trait FieldHandle {
    /// Adds a class to the field's state-class set.
    fn add_class(&mut self, class: &str);
    /// Removes a class from the field's state-class set.
    fn remove_class(&mut self, class: &str);
    /// Sets an attribute on the field, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Removes an attribute from the field.
    fn remove_attribute(&mut self, name: &str);
}

/// Clears the invalid-state markers from a field.
///
/// An absent field, class, or attribute is handled silently; calling this
/// twice on the same field is equivalent to calling it once.
///
/// # Example
/// ```
/// use form_validation::field::{clear_field_validation, mark_field_invalid, FieldState, INVALID_STATE_CLASS};
///
/// let mut field = FieldState::new();
/// mark_field_invalid(Some(&mut field));
/// clear_field_validation(Some(&mut field));
/// assert!(!field.has_class(INVALID_STATE_CLASS));
/// clear_field_validation(None);
/// ```
pub fn clear_field_validation(field: Option<&mut (dyn FieldHandle + '_)>) {
    let Some(field) = field else {
        return;
    };
    field.remove_class(INVALID_STATE_CLASS);
    field.remove_attribute(ARIA_INVALID_ATTR);
}

/// Marks a field as invalid: adds the state class and sets `aria-invalid`.
///
/// Accepts an absent field as a no-op, mirroring [`clear_field_validation`].
pub fn mark_field_invalid(field: Option<&mut (dyn FieldHandle + '_)>) {
    let Some(field) = field else {
        return;
    };
    field.add_class(INVALID_STATE_CLASS);
    field.set_attribute(ARIA_INVALID_ATTR, "true");
}

/// Owned, in-memory field state for UI layers that mirror element state on
/// the Rust side, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl FieldState {
    /// Creates a field with no classes and no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the class is present on the field.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns the attribute value, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl FieldHandle for FieldState {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
