use std::fmt;

/// The seven logical sections of the daily recap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    RouteLogistics,
    CommunityEngagement,
    KnowledgeSharing,
    EnvironmentEmissions,
    EquipmentPerformance,
    TeamSafety,
    SocialMedia,
}

static ALL_PAGES: &[Page] = &[
    Page::RouteLogistics,
    Page::CommunityEngagement,
    Page::KnowledgeSharing,
    Page::EnvironmentEmissions,
    Page::EquipmentPerformance,
    Page::TeamSafety,
    Page::SocialMedia,
];

impl Page {
    /// Returns all pages in form order.
    pub fn all() -> &'static [Page] {
        ALL_PAGES
    }

    /// Returns the zero-based position of this page.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the section title shown in the progress header.
    pub fn title(self) -> &'static str {
        match self {
            Page::RouteLogistics => "Route & Logistics",
            Page::CommunityEngagement => "Community Engagement",
            Page::KnowledgeSharing => "Knowledge Sharing",
            Page::EnvironmentEmissions => "Environment & Emissions",
            Page::EquipmentPerformance => "Equipment Performance",
            Page::TeamSafety => "Team & Safety",
            Page::SocialMedia => "Social Media",
        }
    }

    /// Returns the page after this one, or `None` at the end.
    pub fn next(self) -> Option<Page> {
        ALL_PAGES.get(self.index() + 1).copied()
    }

    /// Returns the page before this one, or `None` at the start.
    pub fn prev(self) -> Option<Page> {
        self.index().checked_sub(1).map(|i| ALL_PAGES[i])
    }
}

#[mutants::skip]
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Strictly sequential navigator over the form pages.
///
/// Movement is always by exactly one page; there is no jump-to-page.
/// Submission is only offered on the final page, and performing it does not
/// move the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: Page,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Creates a pager positioned on the first page.
    pub fn new() -> Self {
        Self {
            current: Page::RouteLogistics,
        }
    }

    /// Returns the active page.
    pub fn current(&self) -> Page {
        self.current
    }

    /// Advances one page. Returns `false` (unchanged) on the last page.
    pub fn next(&mut self) -> bool {
        match self.current.next() {
            Some(page) => {
                self.current = page;
                true
            }
            None => false,
        }
    }

    /// Moves back one page. Returns `false` (unchanged) on the first page.
    pub fn prev(&mut self) -> bool {
        match self.current.prev() {
            Some(page) => {
                self.current = page;
                true
            }
            None => false,
        }
    }

    /// Returns `true` when the navigator sits on the final page, where
    /// submission is offered.
    pub fn can_submit(&self) -> bool {
        self.current == Page::SocialMedia
    }
}
