//! Icons shown next to the toast message
//!
//! The controller never draws icons; it only resolves which one the renderer
//! should paint.

use crate::config::{ToastConfig, ToastKind};

/// Icon identifier handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastIcon {
    /// Check mark
    Done,
    /// Exclamation in a circle
    Error,
    /// Any single glyph supplied by the caller
    Glyph(char),
}

impl ToastIcon {
    /// Fallback glyph for text-only renderers
    pub fn as_char(self) -> char {
        match self {
            Self::Done => '\u{2713}',
            Self::Error => '!',
            Self::Glyph(c) => c,
        }
    }
}

/// Default icon for a toast kind
pub fn icon_for(kind: ToastKind) -> ToastIcon {
    match kind {
        ToastKind::Success => ToastIcon::Done,
        ToastKind::Error => ToastIcon::Error,
    }
}

/// Icon to paint for a config, or `None` when icons are hidden
///
/// An explicit `icon` override wins for every kind.
pub fn resolve_icon(config: &ToastConfig) -> Option<ToastIcon> {
    if !config.show_icon {
        return None;
    }
    Some(config.icon.unwrap_or_else(|| icon_for(config.kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_icon() {
        let config = ToastConfig::default().with_show_icon(false);
        assert_eq!(resolve_icon(&config), None);
    }

    #[test]
    fn test_default_icon_per_kind() {
        let success = ToastConfig::success("ok").with_show_icon(true);
        let error = ToastConfig::error("nope").with_show_icon(true);
        assert_eq!(resolve_icon(&success), Some(ToastIcon::Done));
        assert_eq!(resolve_icon(&error), Some(ToastIcon::Error));
    }

    #[test]
    fn test_override_applies_to_error_kind() {
        let config = ToastConfig::error("nope")
            .with_show_icon(true)
            .with_icon(Some(ToastIcon::Glyph('x')));
        assert_eq!(resolve_icon(&config), Some(ToastIcon::Glyph('x')));
        assert_eq!(ToastIcon::Glyph('x').as_char(), 'x');
    }
}
