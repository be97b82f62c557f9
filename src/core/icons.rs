pub use crate::domain::model::Icon;
use std::str::FromStr;

/// Glyphs picked by position when a skill names none.
const SKILL_GLYPHS: [Icon; 3] = [Icon::Database, Icon::Code, Icon::User];

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::ChevronDown,
        Icon::Github,
        Icon::ExternalLink,
        Icon::Code,
        Icon::User,
        Icon::BookOpen,
        Icon::Send,
        Icon::Database,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::ChevronDown => "chevron-down",
            Icon::Github => "github",
            Icon::ExternalLink => "external-link",
            Icon::Code => "code",
            Icon::User => "user",
            Icon::BookOpen => "book-open",
            Icon::Send => "send",
            Icon::Database => "database",
        }
    }

    pub fn for_skill_index(index: usize) -> Icon {
        SKILL_GLYPHS[index % SKILL_GLYPHS.len()]
    }

    fn body(self) -> &'static str {
        match self {
            Icon::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Icon::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Icon::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Icon::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Icon::BookOpen => {
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#
            }
            Icon::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
            Icon::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#
            }
        }
    }

    /// Inline 24x24 stroke glyph scaled to `size` pixels.
    pub fn svg(self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" data-icon="{name}">{body}</svg>"#,
            size = size,
            name = self.name(),
            body = self.body()
        )
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s.trim())
            .ok_or_else(|| format!("unknown icon '{}'", s))
    }
}
