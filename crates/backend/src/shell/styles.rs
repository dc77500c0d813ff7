//! Shell stylesheet, inlined in the head next to the font variables.

/// Body gradient per theme, the backdrop glow and the frame around `<main>`.
/// Font families come from the `--font-*` variables.
pub const SHELL_CSS: &str = r#"
body.shell-body {
  margin: 0;
  min-height: 100vh;
  font-family: var(--font-inter), sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  color: #0f172a;
  background: linear-gradient(to bottom right, #f8fafc, #ffffff, #f1f5f9);
}
html.dark body.shell-body {
  color: #f1f5f9;
  background: linear-gradient(to bottom right, #020617, #0f172a, #020617);
}
.shell-body ::selection {
  background: rgba(249, 115, 22, 0.2);
  color: #7c2d12;
}
html.dark .shell-body ::selection {
  color: #ffedd5;
}
.font-display {
  font-family: var(--font-playfair), serif;
}
code, kbd, pre, .font-mono {
  font-family: var(--font-fira-code), monospace;
}
.shell-frame {
  position: relative;
  min-height: 100vh;
  width: 100%;
  overflow-x: hidden;
}
.shell-background {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  background: radial-gradient(circle at 50% 120%, rgba(244,110,12,0.1), transparent);
}
.shell-main {
  position: relative;
  z-index: 10;
  width: 100%;
}
"#;
