use crate::domain::model::SearchTerm;

/// The `#search` form and the text input inside it.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    input_value: String,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.input_value
    }
}

/// A form submission. Until `prevent_default` is called the host would
/// navigate away from the page.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Suppresses navigation and reads the current input value. Never fails,
    /// whatever the input holds.
    pub fn on_submit(&self, event: &mut SubmitEvent, form: &SearchForm) -> SearchTerm {
        event.prevent_default();
        let term = SearchTerm::from_input(form.value());
        tracing::debug!("Search submitted: {:?}", term.as_str());
        term
    }
}
