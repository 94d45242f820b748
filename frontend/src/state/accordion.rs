/// Single-open, collapsible accordion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, closing whichever panel was open. Toggling the open
    /// panel collapses it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(AccordionState::default().open, None);
    }

    #[test]
    fn opening_a_panel_closes_the_other() {
        let mut accordion = AccordionState::default();
        accordion.toggle(1);
        accordion.toggle(4);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(4));
    }

    #[test]
    fn toggling_the_open_panel_collapses_it() {
        let mut accordion = AccordionState::default();
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion.open, None);
    }
}
