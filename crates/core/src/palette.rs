use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Global colours exposed to every module as `--color-*` CSS variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub quaternary: String,
    pub gray: String,
    pub selection: String,
    pub hover: String,
    pub success: String,
    pub error: String,
}

impl ColorPalette {
    /// Palette used when no primary colour has been configured.
    pub fn fallback() -> Self {
        Self {
            primary: "#ffffff".to_string(),
            secondary: "#7c3aed".to_string(),
            tertiary: "#94a3b8".to_string(),
            quaternary: "#1e293b".to_string(),
            gray: "#f8fafc".to_string(),
            selection: "#a78bfa".to_string(),
            hover: "#6d28d9".to_string(),
            success: "#10b981".to_string(),
            error: "#ef4444".to_string(),
        }
    }

    fn effective(&self) -> ColorPalette {
        if self.primary.is_empty() {
            Self::fallback()
        } else {
            self.clone()
        }
    }

    /// Renders the `:root` block. Empty colours are left out.
    pub fn render_css(&self) -> String {
        let p = self.effective();
        let vars = [
            ("--color-primary", &p.primary),
            ("--color-secondary", &p.secondary),
            ("--color-tertiary", &p.tertiary),
            ("--color-quaternary", &p.quaternary),
            ("--color-gray", &p.gray),
            ("--color-selection", &p.selection),
            ("--color-hover", &p.hover),
            ("--color-success", &p.success),
            ("--color-error", &p.error),
        ];

        let mut css = String::from(":root {\n    /* Colors */\n");
        for (name, value) in vars {
            if !value.is_empty() {
                let _ = writeln!(css, "    {}: {};", name, value);
            }
        }
        css.push_str("}\n");
        css
    }
}
