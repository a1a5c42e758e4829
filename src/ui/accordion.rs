/// One question/answer pair. `max_height` is 0 when collapsed and the
/// answer's content height when expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqPanel {
    id: String,
    content_height: u32,
    max_height: u32,
}

impl FaqPanel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    pub fn is_open(&self) -> bool {
        self.max_height != 0
    }
}

/// FAQ list where opening one answer collapses every other.
#[derive(Debug, Clone, Default)]
pub struct FaqAccordion {
    panels: Vec<FaqPanel>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel(mut self, id: impl Into<String>, content_height: u32) -> Self {
        self.panels.push(FaqPanel {
            id: id.into(),
            content_height,
            max_height: 0,
        });
        self
    }

    pub fn panel(&self, id: &str) -> Option<&FaqPanel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn open_panel(&self) -> Option<&str> {
        self.panels.iter().find(|p| p.is_open()).map(FaqPanel::id)
    }

    /// Returns false for an unknown id, leaving every panel untouched.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.panel(id).is_none() {
            return false;
        }
        for panel in &mut self.panels {
            panel.max_height = if panel.id != id || panel.is_open() {
                0
            } else {
                panel.content_height
            };
        }
        true
    }
}
