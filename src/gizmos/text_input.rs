//! Text input gizmo

use serde::{Deserialize, Serialize};

use crate::templates::html_escape;

/// Options of a labelled text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInputOptions {
    pub display_text: String,
    /// Form field name, also used as the element id
    pub name: String,
    pub placeholder: String,
    pub initial: String,
    /// Add-on shown before the input
    pub prepend: Option<String>,
    pub disabled: bool,
    /// Validation message shown below the input
    pub error: Option<String>,
}

impl TextInputOptions {
    pub fn new(name: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            name: name.into(),
            placeholder: String::new(),
            initial: String::new(),
            prepend: None,
            disabled: false,
            error: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(text.into());
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Render the widget
    pub fn render(&self) -> String {
        let name = html_escape(&self.name);
        let input = format!(
            r#"<input type="text" class="form-control" id="{name}" name="{name}" placeholder="{placeholder}" value="{value}"{disabled}>"#,
            name = name,
            placeholder = html_escape(&self.placeholder),
            value = html_escape(&self.initial),
            disabled = if self.disabled { " disabled" } else { "" }
        );

        let control = match &self.prepend {
            Some(text) => format!(
                r#"<div class="input-group"><span class="input-group-addon">{}</span>{}</div>"#,
                html_escape(text),
                input
            ),
            None => input,
        };

        let (group_class, help) = match &self.error {
            Some(message) => (
                "form-group has-error",
                format!(r#"<p class="help-block">{}</p>"#, html_escape(message)),
            ),
            None => ("form-group", String::new()),
        };

        format!(
            r#"<div class="{group_class}"><label class="control-label" for="{name}">{label}</label>{control}{help}</div>"#,
            group_class = group_class,
            name = name,
            label = html_escape(&self.display_text),
            control = control,
            help = help
        )
    }
}
