#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "experience",
        label: "Experience",
    },
    Section {
        id: "blog",
        label: "Blog",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollTarget {
    Top,
    Anchor(&'static str),
}

#[cfg(target_arch = "wasm32")]
pub enum SectionEvent {
    Batch(Vec<Observation>),
    Select(&'static str),
}

/// Single owner of the active-section value. Observation batches and nav
/// clicks both funnel through here; nothing else mutates the active id.
#[derive(Clone, PartialEq)]
pub struct SectionTracker {
    sections: &'static [Section],
    active: &'static str,
}

impl SectionTracker {
    // Descriptor lists are compile-time constants and never empty.
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            active: sections[0].id,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    fn resolve(&self, id: &str) -> Option<&'static str> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.id)
    }

    /// Most-visible intersecting section wins. The sort is stable, so entries
    /// reporting identical ratios keep the order the observer delivered them
    /// in — that order is not defined by the platform and we do not impose
    /// our own tie-break on top of it.
    pub fn observe(&mut self, batch: &[Observation]) {
        let mut visible: Vec<&Observation> =
            batch.iter().filter(|entry| entry.intersecting).collect();
        visible.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

        if let Some(id) = visible.iter().find_map(|entry| self.resolve(&entry.id)) {
            self.active = id;
        }
    }

    /// Optimistic: the clicked section becomes active before any scrolling
    /// or observer confirmation happens.
    pub fn select(&mut self, id: &str) {
        if let Some(id) = self.resolve(id) {
            self.active = id;
        }
    }

    pub fn scroll_target(&self, id: &'static str) -> ScrollTarget {
        if id == self.sections[0].id {
            ScrollTarget::Top
        } else {
            ScrollTarget::Anchor(id)
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl yew::functional::Reducible for SectionTracker {
    type Action = SectionEvent;

    fn reduce(self: std::rc::Rc<Self>, action: SectionEvent) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SectionEvent::Batch(batch) => next.observe(&batch),
            SectionEvent::Select(id) => next.select(id),
        }

        if next.active == self.active {
            self
        } else {
            std::rc::Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE: &[Section] = &[
        Section {
            id: "about",
            label: "About",
        },
        Section {
            id: "projects",
            label: "Projects",
        },
        Section {
            id: "experience",
            label: "Experience",
        },
    ];

    fn entry(id: &str, ratio: f64, intersecting: bool) -> Observation {
        Observation {
            id: id.to_string(),
            ratio,
            intersecting,
        }
    }

    #[test]
    fn starts_on_first_section() {
        let tracker = SectionTracker::new(THREE);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn most_visible_intersecting_section_becomes_active() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[
            entry("projects", 0.6, true),
            entry("experience", 0.3, true),
        ]);
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn empty_batch_keeps_last_active_section() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[entry("projects", 0.6, true)]);
        tracker.observe(&[]);
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[
            entry("experience", 0.9, false),
            entry("projects", 0.2, true),
        ]);
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn batch_with_no_intersecting_entries_is_sticky() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[entry("experience", 0.8, true)]);
        tracker.observe(&[
            entry("about", 0.5, false),
            entry("projects", 0.7, false),
        ]);
        assert_eq!(tracker.active(), "experience");
    }

    #[test]
    fn unknown_ids_never_become_active() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[
            entry("footer", 0.9, true),
            entry("experience", 0.4, true),
        ]);
        assert_eq!(tracker.active(), "experience");
    }

    #[test]
    fn equal_ratios_keep_report_order() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[
            entry("experience", 0.5, true),
            entry("projects", 0.5, true),
        ]);
        assert_eq!(tracker.active(), "experience");
    }

    #[test]
    fn select_sets_active_immediately() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.observe(&[entry("projects", 0.6, true)]);
        tracker.select("experience");
        assert_eq!(tracker.active(), "experience");
    }

    #[test]
    fn select_ignores_unknown_id() {
        let mut tracker = SectionTracker::new(THREE);
        tracker.select("footer");
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn first_section_scrolls_to_top_others_to_anchor() {
        let tracker = SectionTracker::new(THREE);
        assert_eq!(tracker.scroll_target("about"), ScrollTarget::Top);
        assert_eq!(
            tracker.scroll_target("experience"),
            ScrollTarget::Anchor("experience")
        );
    }

    #[test]
    fn observer_then_silence_then_click_scenario() {
        let mut tracker = SectionTracker::new(THREE);

        tracker.observe(&[
            entry("projects", 0.6, true),
            entry("experience", 0.3, true),
        ]);
        assert_eq!(tracker.active(), "projects");

        tracker.observe(&[]);
        assert_eq!(tracker.active(), "projects");

        tracker.select("experience");
        assert_eq!(tracker.active(), "experience");
        assert_eq!(
            tracker.scroll_target("experience"),
            ScrollTarget::Anchor("experience")
        );
    }

    #[test]
    fn full_page_variant_lists_four_sections() {
        let tracker = SectionTracker::new(SECTIONS);
        let ids: Vec<&str> = tracker.sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["about", "projects", "experience", "blog"]);
        assert_eq!(tracker.active(), "about");
    }
}
