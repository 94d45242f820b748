use crate::content::{find_feature_group, FeatureGroup, FEATURE_GROUPS};

/// Which feature group the "Unlock Your Potential" switcher shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTabs {
    active: &'static str,
}

impl Default for FeatureTabs {
    fn default() -> Self {
        Self {
            active: FEATURE_GROUPS.first().map(|group| group.title).unwrap_or_default(),
        }
    }
}

impl FeatureTabs {
    pub fn is_active(&self, title: &str) -> bool {
        self.active == title
    }

    pub fn select(&mut self, title: &'static str) {
        self.active = title;
    }

    pub fn active_group(&self) -> Option<&'static FeatureGroup> {
        find_feature_group(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_group() {
        let tabs = FeatureTabs::default();
        assert_eq!(tabs.active, "Resource Hub");
        assert_eq!(tabs.active_group().map(|g| g.features.len()), Some(3));
    }

    #[test]
    fn selecting_switches_the_panel() {
        let mut tabs = FeatureTabs::default();
        tabs.select("Community Hub");
        assert!(tabs.is_active("Community Hub"));
        assert!(!tabs.is_active("Resource Hub"));
        let titles: Vec<_> = tabs.active_group().unwrap().features.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["Idea Exchange", "Community Voice"]);
    }

    #[test]
    fn unknown_title_shows_nothing() {
        let mut tabs = FeatureTabs::default();
        tabs.select("Nope");
        assert!(tabs.active_group().is_none());
    }
}
