//! Interaction feedback
//!
//! Widgets and focus groups announce user-visible state changes (a toggled
//! checkbox, a focus move) through [`Feedback`]. The host decides what that means,
//! usually a short menu sound.

/// Kind of feedback to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackCue {
    /// Short tick for toggles, focus moves, text edits and hover
    MenuTick,
}

/// Host hook for interaction feedback
pub trait Feedback {
    /// Emit a cue
    fn play(&mut self, cue: FeedbackCue);
}

/// Feedback sink that ignores every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn play(&mut self, _cue: FeedbackCue) {}
}

/// Feedback sink that remembers the cues it received
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    cues: Vec<FeedbackCue>,
}

impl RecordingFeedback {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues received so far, oldest first
    pub fn cues(&self) -> &[FeedbackCue] {
        &self.cues
    }

    /// Number of cues received so far
    pub fn count(&self) -> usize {
        self.cues.len()
    }
}

impl Feedback for RecordingFeedback {
    fn play(&mut self, cue: FeedbackCue) {
        log::trace!("Feedback cue {cue:?}");
        self.cues.push(cue);
    }
}
