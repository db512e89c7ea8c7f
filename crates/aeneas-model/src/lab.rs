//! Studio Lab entries: freelance work, proposals and reports.

/// Label shown in place of a link when an entry has no target yet.
pub const PENDING_CASE_STUDY: &str = "케이스 스터디 준비중";

/// Call-to-action label used when an entry has a link but no label.
const DEFAULT_CTA: &str = "열어보기";

/// Category of a lab entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabItemKind {
    Freelance,
    Proposal,
    Report,
}

impl LabItemKind {
    /// Footer label for cards of this kind.
    pub fn footer_label(&self) -> &'static str {
        match self {
            Self::Freelance => "Client work",
            Self::Proposal => "Deck / Proposal",
            Self::Report => "Report",
        }
    }
}

/// One card in the Studio Lab grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabItem {
    pub id: &'static str,
    pub kind: LabItemKind,
    pub badge: &'static str,
    pub title: &'static str,
    pub period: Option<&'static str>,
    pub role: &'static str,
    pub summary: &'static str,
    /// Site URL or PDF path, passed through unchanged.
    pub href: Option<&'static str>,
    pub cta: Option<&'static str>,
}

impl LabItem {
    /// Link target and its label, if the entry links anywhere.
    pub fn call_to_action(&self) -> Option<(&'static str, &'static str)> {
        self.href.map(|href| (href, self.cta.unwrap_or(DEFAULT_CTA)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(href: Option<&'static str>, cta: Option<&'static str>) -> LabItem {
        LabItem {
            id: "x",
            kind: LabItemKind::Report,
            badge: "REPORT",
            title: "t",
            period: None,
            role: "r",
            summary: "s",
            href,
            cta,
        }
    }

    #[test]
    fn missing_cta_falls_back_to_default() {
        assert_eq!(
            item(Some("https://example.com"), None).call_to_action(),
            Some(("https://example.com", "열어보기"))
        );
    }

    #[test]
    fn no_href_means_no_call_to_action() {
        assert_eq!(item(None, Some("ignored")).call_to_action(), None);
    }

    #[test]
    fn footer_labels() {
        assert_eq!(LabItemKind::Freelance.footer_label(), "Client work");
        assert_eq!(LabItemKind::Proposal.footer_label(), "Deck / Proposal");
        assert_eq!(LabItemKind::Report.footer_label(), "Report");
    }
}
