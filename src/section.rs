use crate::constants::SECTION_OFFSET;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
}

/// Works out which page section the navigation bar should highlight.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    offset: f32,
}

impl SectionTracker {
    /// `sections` in document order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections, offset: SECTION_OFFSET }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Last section whose top, pulled up by the offset, has been scrolled past.
    pub fn current(&self, scroll_y: f32) -> Option<&str> {
        self.sections
            .iter()
            .filter(|section| scroll_y >= section.top - self.offset)
            .last()
            .map(|section| section.id.as_str())
    }
}
