//! What the platform should do with an input event after handling

/// Whether the browser's default behaviour for an event must be suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub enum DefaultAction {
    /// Let the platform run its default behaviour
    #[default]
    Allow,
    /// Call `preventDefault()` on the event
    Prevent,
}

impl DefaultAction {
    /// Whether the default behaviour should be suppressed
    #[must_use]
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}

impl std::fmt::Display for DefaultAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Prevent => write!(f, "prevent"),
        }
    }
}
