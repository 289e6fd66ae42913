//! Named page sections.

/// A named section of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// All sections in the order they appear on the page.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Stable identifier, matching the anchor names of the page.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Whether the section has a link in the navigation bar.
    pub fn in_nav(&self) -> bool {
        *self != Section::Hero
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Section> {
        (n as usize).checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Next section, saturating at the last one.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous section, saturating at the first one.
    pub fn prev(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}
