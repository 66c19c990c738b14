//! Page sections, in render order.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Architecture,
    MarginEngine,
    Risk,
    CallToAction,
}

impl Section {
    /// Fixed render order, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Architecture,
        Section::MarginEngine,
        Section::Risk,
        Section::CallToAction,
    ];

    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Architecture => "architecture",
            Section::MarginEngine => "pricing",
            Section::Risk => "risk",
            Section::CallToAction => "demo",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Architecture => "Architecture",
            Section::MarginEngine => "Margin Engine",
            Section::Risk => "Risk",
            Section::CallToAction => "Get Started",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    /// Resolve a 1-based navigation digit.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Next section, wrapping to the top.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn digits_map_in_render_order() {
        assert_eq!(Section::from_digit('1'), Some(Section::Hero));
        assert_eq!(Section::from_digit('3'), Some(Section::MarginEngine));
        assert_eq!(Section::from_digit('5'), Some(Section::CallToAction));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Section::Hero.next(), Section::Architecture);
        assert_eq!(Section::CallToAction.next(), Section::Hero);
    }
}
