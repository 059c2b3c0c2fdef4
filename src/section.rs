#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Skills => "My Skills",
            Self::Projects => "Featured Projects",
            Self::Contact => "Get In Touch",
        }
    }

    /// Fraction of the section that must be on screen before it counts as in view.
    pub fn in_view_amount(self) -> f64 {
        match self {
            Self::Projects => 0.1,
            Self::About | Self::Skills | Self::Contact => 0.3,
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::Contact => 3,
        }
    }
}

/// Share of an element's height inside a viewport of `viewport_height`,
/// given the element's `top` relative to the viewport.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }

    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible.max(0.0) / height).clamp(0.0, 1.0)
}

pub fn is_in_view(top: f64, height: f64, viewport_height: f64, amount: f64) -> bool {
    let fraction = visible_fraction(top, height, viewport_height);
    fraction > 0.0 && fraction >= amount
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility([bool; 4]);

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        self.0[section.index()]
    }

    pub fn with(mut self, section: Section, visible: bool) -> Self {
        self.0[section.index()] = visible;
        self
    }

    /// Sections whose flag differs between `self` and `other`.
    pub fn changed_from(&self, other: &SectionVisibility) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.is_visible(*section) != other.is_visible(*section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_element_reports_one() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
    }

    #[test]
    fn element_below_the_fold_reports_zero() {
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        assert!(!is_in_view(900.0, 200.0, 800.0, 0.1));
    }

    #[test]
    fn partially_scrolled_in_element_uses_visible_share() {
        // 200 of 1000 px on screen.
        let fraction = visible_fraction(600.0, 1000.0, 800.0);
        assert!((fraction - 0.2).abs() < 1e-9);

        assert!(is_in_view(600.0, 1000.0, 800.0, Section::Projects.in_view_amount()));
        assert!(!is_in_view(600.0, 1000.0, 800.0, Section::About.in_view_amount()));
    }

    #[test]
    fn element_scrolled_past_the_top_is_clipped() {
        let fraction = visible_fraction(-150.0, 200.0, 800.0);
        assert!((fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn zero_height_element_is_never_in_view() {
        assert!(!is_in_view(10.0, 0.0, 800.0, 0.0));
    }

    #[test]
    fn visibility_flags_are_independent() {
        let before = SectionVisibility::default();
        let after = before.with(Section::Skills, true).with(Section::Contact, true);

        assert!(!after.is_visible(Section::About));
        assert!(after.is_visible(Section::Skills));
        assert_eq!(after.changed_from(&before), vec![Section::Skills, Section::Contact]);
    }

    #[test]
    fn anchors_match_ids() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
    }
}
