//! Experience-section hover showcase
//!
//! Hovering (or focusing) a step highlights it and swaps the shared video
//! element to that step's clip. Re-hovering the loaded step must not
//! restart playback.

/// Media attached to one showcase step (read from its data attributes)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepMedia {
    pub video: Option<String>,
    pub poster: Option<String>,
}

/// A video source swap the glue must apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    pub video: String,
    pub poster: Option<String>,
}

/// Which step currently holds the highlight
#[derive(Debug, Clone)]
pub struct Showcase {
    len: usize,
    active: usize,
}

impl Showcase {
    /// The first step is active on init
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Move the highlight to `index`; returns true when it actually moved.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

/// Decide whether hovering a step requires loading a new video source.
///
/// `None` when the step carries no video or its source is already loaded.
pub fn swap_for(current_src: Option<&str>, step: &StepMedia) -> Option<Swap> {
    let video = step.video.as_deref()?;
    if current_src == Some(video) {
        return None;
    }
    Some(Swap {
        video: video.to_string(),
        poster: step.poster.clone(),
    })
}
