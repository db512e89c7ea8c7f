//! Tool badge parsing.

/// Icon used for tools without a dedicated glyph.
const FALLBACK_ICON: &str = "•";

const TOOL_ICONS: &[(&str, &str)] = &[
    ("Figma", "🎨"),
    ("Photoshop", "🖼"),
    ("Illustrator", "✏️"),
    ("HTML/CSS", "{;}"),
    ("Rakuten 관리툴", "🛒"),
    ("Notion", "📒"),
    ("Webflow/Next.js", "🌐"),
];

/// A tool name with its badge icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo<'a> {
    pub name: &'a str,
    pub icon: &'static str,
}

/// Split a comma separated tool list into badges.
///
/// Names are trimmed and matched exactly against the icon table; blank
/// entries are skipped.
///
/// # Examples
///
/// ```
/// use aeneas_model::parse_tools;
///
/// let tools = parse_tools("Figma, Cafe24");
/// assert_eq!(tools[0].icon, "🎨");
/// assert_eq!(tools[1].name, "Cafe24");
/// assert_eq!(tools[1].icon, "•");
/// ```
pub fn parse_tools(tools: &str) -> Vec<ToolInfo<'_>> {
    tools
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| ToolInfo {
            name,
            icon: icon_for(name),
        })
        .collect()
}

fn icon_for(name: &str) -> &'static str {
    TOOL_ICONS
        .iter()
        .find(|(tool, _)| *tool == name)
        .map_or(FALLBACK_ICON, |&(_, icon)| icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tools_get_icons() {
        let tools = parse_tools("Photoshop, HTML/CSS, Rakuten 관리툴");
        let icons: Vec<_> = tools.iter().map(|t| t.icon).collect();
        assert_eq!(icons, vec!["🖼", "{;}", "🛒"]);
    }

    #[test]
    fn blank_entries_are_skipped() {
        let tools = parse_tools("Notion, , Toss,");
        let names: Vec<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Notion", "Toss"]);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(parse_tools("figma")[0].icon, FALLBACK_ICON);
    }
}
