//! Exclusive FAQ accordion
//!
//! At most one item is open at a time; opening an item collapses whatever
//! else was open, clicking the open item collapses it.

/// DOM work resulting from a click on an accordion item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionChange {
    /// Items whose panels must collapse
    pub collapse: Vec<usize>,
    /// Item whose panel must expand, if any
    pub expand: Option<usize>,
}

/// Open/closed state of the accordion
#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All items start closed
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Index of the open item, if any
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle a click on item `index`.
    ///
    /// Returns the class/height changes the glue must apply, or `None` for
    /// an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<AccordionChange> {
        if index >= self.len {
            return None;
        }

        if self.open == Some(index) {
            self.open = None;
            return Some(AccordionChange {
                collapse: vec![index],
                expand: None,
            });
        }

        let collapse: Vec<usize> = self.open.into_iter().collect();
        self.open = Some(index);
        Some(AccordionChange {
            collapse,
            expand: Some(index),
        })
    }
}
