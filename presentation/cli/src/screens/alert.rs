/// User-facing message box: what a screen shows instead of its content when an
/// action is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn sign_in_required() -> Self {
        Self::new("Sign In Required", "Please log in to continue.")
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

pub trait IntoAlert {
    fn into_alert(self) -> Alert;
}

/// Rendered screen text, or the alert that replaced it.
pub type ScreenResult = Result<String, Alert>;
