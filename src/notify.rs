/// Transient user-facing messages.
///
/// The workflow and adapters produce `Notification` values; the UI layer
/// is the sink that actually shows them (a toast strip). Nothing in the
/// core depends on how, or whether, they get rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}
