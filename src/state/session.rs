/// View model for the upload → processing → result flow
///
/// A `Session` is an immutable value. Every transition returns a new one,
/// and the images live inside the phase they belong to, so "no enhanced
/// image outside Result" and "an original image whenever not Idle" hold by
/// construction.

use crate::media::DataUrl;

/// Which top-level region of the window is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Processing,
    Result,
}

/// Token identifying one upload (or reset)
///
/// Scheduled completions carry the generation they were created for and are
/// ignored once a newer one exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Processing {
        original: DataUrl,
    },
    Result {
        original: DataUrl,
        enhanced: DataUrl,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    generation: Generation,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> ViewState {
        match self.phase {
            Phase::Idle => ViewState::Idle,
            Phase::Processing { .. } => ViewState::Processing,
            Phase::Result { .. } => ViewState::Result,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn original(&self) -> Option<&DataUrl> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Processing { original } | Phase::Result { original, .. } => Some(original),
        }
    }

    pub fn enhanced(&self) -> Option<&DataUrl> {
        match &self.phase {
            Phase::Result { enhanced, .. } => Some(enhanced),
            _ => None,
        }
    }

    /// Idle → Processing under a fresh generation
    ///
    /// Returns `None` outside Idle.
    pub fn begin_processing(&self, original: DataUrl) -> Option<Self> {
        match self.phase {
            Phase::Idle => Some(Self {
                generation: self.generation.next(),
                phase: Phase::Processing { original },
            }),
            _ => None,
        }
    }

    /// Processing → Result, only for the current generation
    ///
    /// The enhanced image is the original: no real enhancement happens.
    pub fn complete(&self, generation: Generation) -> Option<Self> {
        match &self.phase {
            Phase::Processing { original } if generation == self.generation => Some(Self {
                generation: self.generation,
                phase: Phase::Result {
                    original: original.clone(),
                    enhanced: original.clone(),
                },
            }),
            _ => None,
        }
    }

    /// Any state → Idle; supersedes every pending completion
    pub fn reset(&self) -> Self {
        Self {
            generation: self.generation.next(),
            phase: Phase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(tag: u8) -> DataUrl {
        DataUrl::new("image/png", vec![tag; 4])
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.view_state(), ViewState::Idle);
        assert!(session.original().is_none());
        assert!(session.enhanced().is_none());
    }

    #[test]
    fn full_cycle_keeps_invariants() {
        let idle = Session::new();
        let processing = idle.begin_processing(image(1)).unwrap();
        assert_eq!(processing.view_state(), ViewState::Processing);
        assert_eq!(processing.original(), Some(&image(1)));
        assert!(processing.enhanced().is_none());
        assert!(processing.generation() > idle.generation());

        let result = processing.complete(processing.generation()).unwrap();
        assert_eq!(result.view_state(), ViewState::Result);
        assert_eq!(result.enhanced(), result.original());

        let back = result.reset();
        assert_eq!(back.view_state(), ViewState::Idle);
        assert!(back.original().is_none());
        assert!(back.enhanced().is_none());
    }

    #[test]
    fn transitions_do_not_mutate_the_source() {
        let idle = Session::new();
        let _ = idle.begin_processing(image(1));
        assert_eq!(idle, Session::new());
    }

    #[test]
    fn begin_processing_only_from_idle() {
        let processing = Session::new().begin_processing(image(1)).unwrap();
        assert!(processing.begin_processing(image(2)).is_none());

        let result = processing.complete(processing.generation()).unwrap();
        assert!(result.begin_processing(image(2)).is_none());
    }

    #[test]
    fn stale_generation_cannot_complete() {
        let first = Session::new().begin_processing(image(1)).unwrap();
        let stale = first.generation();

        let second = first.reset().begin_processing(image(2)).unwrap();
        assert!(second.complete(stale).is_none());

        let result = second.complete(second.generation()).unwrap();
        assert_eq!(result.enhanced(), Some(&image(2)));
    }

    #[test]
    fn complete_outside_processing_is_ignored() {
        let idle = Session::new();
        assert!(idle.complete(idle.generation()).is_none());

        let processing = idle.begin_processing(image(1)).unwrap();
        let result = processing.complete(processing.generation()).unwrap();
        assert!(result.complete(result.generation()).is_none());
    }

    #[test]
    fn generations_increase_monotonically() {
        let a = Session::new();
        let b = a.begin_processing(image(1)).unwrap();
        let c = b.reset();
        let d = c.begin_processing(image(2)).unwrap();
        assert!(a.generation() < b.generation());
        assert!(b.generation() < c.generation());
        assert!(c.generation() < d.generation());
        assert_eq!(d.generation().value(), 3);
    }
}
