use wasm_bindgen::JsCast;

/// Probe offset compensating for the fixed header overlapping the top of
/// the viewport.
pub const HEADER_OFFSET: f64 = 100.0;

/// The page's sections in layout order. The order doubles as scroll-spy
/// precedence: when measured ranges overlap, the earlier section wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id of the rendered `<section>` element. In-page links and
    /// the scroll listener both match on these exact strings.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Measured geometry of one rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// First section whose vertical range contains `probe`, scanning top to
/// bottom. `None` when the probe lands outside every section, e.g. above
/// the first one; callers keep the previously active section in that case.
pub fn active_section(bounds: &[SectionBounds], probe: f64) -> Option<Section> {
    bounds.iter().find(|b| b.contains(probe)).map(|b| b.section)
}

/// Current vertical scroll position of the window.
pub fn scroll_position() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Measure a section's offset geometry in the rendered document. `None`
/// if the section has no element yet.
pub fn measure(section: Section) -> Option<SectionBounds> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?;
    let element = element.dyn_ref::<web_sys::HtmlElement>()?;
    Some(SectionBounds {
        section,
        top: element.offset_top() as f64,
        height: element.offset_height() as f64,
    })
}

/// Geometry of every section currently in the document, in layout order.
pub fn measure_all() -> Vec<SectionBounds> {
    Section::ALL.iter().copied().filter_map(measure).collect()
}

/// Smooth-scroll the viewport to a section. Does nothing when the section
/// has no rendered element.
pub fn scroll_to(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll back to the top of the document.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Geometry fixture: home spans 0..800, about 800..1400, skills 1400..2000
    fn fixture() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                section: Section::Home,
                top: 0.0,
                height: 800.0,
            },
            SectionBounds {
                section: Section::About,
                top: 800.0,
                height: 600.0,
            },
            SectionBounds {
                section: Section::Skills,
                top: 1400.0,
                height: 600.0,
            },
        ]
    }

    #[test]
    fn test_probe_selects_containing_section() {
        let bounds = fixture();
        assert_eq!(active_section(&bounds, 750.0), Some(Section::Home));
        assert_eq!(active_section(&bounds, 850.0), Some(Section::About));
        assert_eq!(active_section(&bounds, 1950.0), Some(Section::Skills));
    }

    #[test]
    fn test_range_boundaries_are_half_open() {
        let bounds = fixture();
        assert_eq!(active_section(&bounds, 0.0), Some(Section::Home));
        assert_eq!(active_section(&bounds, 799.0), Some(Section::Home));
        assert_eq!(active_section(&bounds, 800.0), Some(Section::About));
    }

    #[test]
    fn test_probe_outside_every_section_matches_nothing() {
        let bounds = fixture();
        assert_eq!(active_section(&bounds, -50.0), None);
        assert_eq!(active_section(&bounds, 2000.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn test_earlier_section_wins_when_ranges_overlap() {
        let bounds = vec![
            SectionBounds {
                section: Section::Home,
                top: 0.0,
                height: 1000.0,
            },
            SectionBounds {
                section: Section::About,
                top: 900.0,
                height: 200.0,
            },
        ];
        assert_eq!(active_section(&bounds, 950.0), Some(Section::Home));
        assert_eq!(active_section(&bounds, 1050.0), Some(Section::About));
    }

    #[test]
    fn test_anchor_ids_are_stable() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    }
}
