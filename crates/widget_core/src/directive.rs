//! UiDirective - Server-driven UI affordances
//!
//! The backend tells the widget which interactive affordance to render
//! next. Modeled as a tagged union so renderers branch exhaustively
//! instead of switching on strings.

use serde::{Deserialize, Serialize};

/// Server-supplied instruction for the next interactive affordance.
///
/// At most one directive is pending at a time; every `/chat` reply that
/// carries one replaces whatever was rendered before.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiDirective {
    /// A row of one-click option pills.
    Buttons { options: Vec<String> },

    /// Same options, rendered as a dropdown.
    Dropdown { options: Vec<String> },

    /// Contact form: country dropdown plus a free-text phone field.
    /// Submission serializes as `"{country}:{phone}"`.
    Form { options: Vec<String> },

    /// File upload zone. `upload_to` is the server-chosen endpoint path,
    /// `user_email` the address attached alongside the file.
    FileUpload {
        upload_to: String,
        user_email: String,
    },
}

impl UiDirective {
    /// Options list for the option-bearing variants.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Buttons { options } | Self::Dropdown { options } | Self::Form { options } => {
                Some(options)
            }
            Self::FileUpload { .. } => None,
        }
    }

    /// Whether this directive asks for a file.
    pub fn is_file_upload(&self) -> bool {
        matches!(self, Self::FileUpload { .. })
    }
}
