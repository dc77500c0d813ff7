//! Pre-paint hooks: small trusted routines that must run before the first
//! pixel is painted. The shell emits each one as an inline, blocking
//! `<script>` at the end of `<head>`.

use contracts::shell::theme;

pub trait PrePaintHook: Send + Sync {
    /// Element id of the emitted script.
    fn id(&self) -> &'static str;

    /// Executable source. Must not contain a closing script tag.
    fn source(&self) -> String;
}

/// Applies the persisted (or system) light/dark theme before first paint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeInitHook;

impl PrePaintHook for ThemeInitHook {
    fn id(&self) -> &'static str {
        "theme-init"
    }

    fn source(&self) -> String {
        theme::theme_script()
    }
}

/// Source that can safely be inlined, `None` if it would end the element early.
pub fn inline_source(hook: &dyn PrePaintHook) -> Option<String> {
    let source = hook.source();
    if source.to_ascii_lowercase().contains("</script") {
        tracing::warn!(hook = hook.id(), "pre-paint hook skipped: source closes the script element");
        return None;
    }
    Some(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Breaking;

    impl PrePaintHook for Breaking {
        fn id(&self) -> &'static str {
            "breaking"
        }

        fn source(&self) -> String {
            "document.write('</SCRIPT>')".to_string()
        }
    }

    #[test]
    fn test_theme_hook_is_inlinable() {
        let source = inline_source(&ThemeInitHook).expect("theme script must inline");
        assert!(source.contains("cinetron-theme"));
    }

    #[test]
    fn test_closing_tag_is_rejected() {
        assert_eq!(inline_source(&Breaking), None);
    }
}
