//! Forms
//!
//! Field state and validation for the feedback and add-pet forms. The UI
//! binds inputs to these structs and shows [`ValidationErrors`] inline.

mod feedback;
mod pet;
mod validation;

pub use feedback::{FeedbackForm, FeedbackSubmission, UseCase, PET_TYPES};
pub use pet::{added_message, NewPetForm, PhotoUpload, MAX_BIO_CHARS, MAX_PHOTO_BYTES};
pub use validation::{is_valid_email, FieldError, ValidationErrors};

/// Simulated round trip before a submission is acknowledged
pub const ACK_DELAY_MS: u32 = 800;

/// How long the thank-you banner stays up
pub const SUCCESS_BANNER_MS: u32 = 5000;

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Waiting out [`ACK_DELAY_MS`]
    Submitting,
    /// Banner showing for [`SUCCESS_BANNER_MS`]
    Submitted,
}

impl SubmissionPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    /// Only an idle form takes a new submission; the banner replaces the
    /// form until its timer returns it to [`Editing`](Self::Editing)
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionPhase::Editing)
    }

    /// Next phase when the pending timer fires
    pub fn advance(self) -> Self {
        match self {
            SubmissionPhase::Editing => SubmissionPhase::Editing,
            SubmissionPhase::Submitting => SubmissionPhase::Submitted,
            SubmissionPhase::Submitted => SubmissionPhase::Editing,
        }
    }

    /// Delay before [`advance`](Self::advance) should run, if any
    pub fn timer_ms(&self) -> Option<u32> {
        match self {
            SubmissionPhase::Editing => None,
            SubmissionPhase::Submitting => Some(ACK_DELAY_MS),
            SubmissionPhase::Submitted => Some(SUCCESS_BANNER_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_cycle() {
        let mut phase = SubmissionPhase::Submitting;
        assert!(phase.is_busy());
        assert_eq!(phase.timer_ms(), Some(800));

        phase = phase.advance();
        assert_eq!(phase, SubmissionPhase::Submitted);
        assert_eq!(phase.timer_ms(), Some(5000));

        phase = phase.advance();
        assert_eq!(phase, SubmissionPhase::Editing);
        assert_eq!(phase.timer_ms(), None);
        assert_eq!(phase.advance(), SubmissionPhase::Editing);
    }

    #[test]
    fn test_only_editing_accepts_submit() {
        assert!(SubmissionPhase::Editing.accepts_submit());
        assert!(!SubmissionPhase::Submitting.accepts_submit());

        // Banner up: not busy, still closed to submits
        let shown = SubmissionPhase::Submitting.advance();
        assert!(!shown.is_busy());
        assert!(!shown.accepts_submit());
        assert!(shown.advance().accepts_submit());
    }
}
