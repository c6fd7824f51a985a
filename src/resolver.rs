//! Sequential "first success wins" image resolution.
//!
//! [`ImageResolver`] is a small state machine over a [`CandidateUrls`]
//! sequence. A caller takes the current candidate, attempts to load it, and
//! reports the result; the resolver either finishes or advances to the next
//! candidate. Attempts are never raced: the first candidate that loads wins,
//! even when a later candidate would also succeed.
//!
//! The terminal [`ResolveOutcome`] is reported exactly once. After that,
//! [`ImageResolver::current`] returns `None` and further reports are ignored.

use crate::candidates::CandidateUrls;
use crate::loader::{DecodedImage, ImageLoader};

/// Result of one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Loaded,
    Failed,
}

/// Terminal result of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// A candidate loaded; carries the winning path
    Resolved(String),
    /// Every candidate failed
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ResolverState {
    /// Waiting on the candidate at this position
    Pending { url: String, position: usize },
    Resolved(String),
    Exhausted,
}

/// Consumes candidate paths one at a time until one loads.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    candidates: CandidateUrls,
    state: ResolverState,
}

/// Everything learned by driving a resolver to completion.
pub struct Resolution {
    pub outcome: ResolveOutcome,
    /// Decoded pixels of the winning candidate
    pub image: Option<DecodedImage>,
    /// Every path attempted, in order
    pub attempted: Vec<String>,
}

impl ImageResolver {
    /// Creates a resolver positioned on the first candidate.
    ///
    /// An empty candidate sequence yields an already-exhausted resolver.
    pub fn new(mut candidates: CandidateUrls) -> Self {
        let state = match candidates.next() {
            Some(url) => ResolverState::Pending { url, position: 0 },
            None => ResolverState::Exhausted,
        };
        Self { candidates, state }
    }

    /// Returns the candidate awaiting an attempt, if resolution is still pending.
    pub fn current(&self) -> Option<&str> {
        match &self.state {
            ResolverState::Pending { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Zero-based position of the pending candidate.
    pub fn position(&self) -> Option<usize> {
        match &self.state {
            ResolverState::Pending { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Returns true once the resolver has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        !matches!(self.state, ResolverState::Pending { .. })
    }

    /// Returns the terminal outcome, if reached.
    pub fn outcome(&self) -> Option<ResolveOutcome> {
        match &self.state {
            ResolverState::Pending { .. } => None,
            ResolverState::Resolved(url) => Some(ResolveOutcome::Resolved(url.clone())),
            ResolverState::Exhausted => Some(ResolveOutcome::Exhausted),
        }
    }

    /// Records the result of attempting [`current`](Self::current).
    ///
    /// Returns the terminal outcome on the transition that reaches it and
    /// `None` otherwise, including every report made after completion.
    pub fn report(&mut self, attempt: Attempt) -> Option<ResolveOutcome> {
        let (url, position) = match &self.state {
            ResolverState::Pending { url, position } => (url.clone(), *position),
            _ => return None,
        };

        match attempt {
            Attempt::Loaded => {
                self.state = ResolverState::Resolved(url.clone());
                Some(ResolveOutcome::Resolved(url))
            }
            Attempt::Failed => match self.candidates.next() {
                Some(next) => {
                    self.state = ResolverState::Pending {
                        url: next,
                        position: position + 1,
                    };
                    None
                }
                None => {
                    self.state = ResolverState::Exhausted;
                    Some(ResolveOutcome::Exhausted)
                }
            },
        }
    }

    /// Drives the resolver to completion, one blocking attempt at a time.
    ///
    /// There is no timeout: a load that never returns stalls this resolver
    /// only.
    pub fn resolve<L: ImageLoader + ?Sized>(&mut self, loader: &L) -> Resolution {
        let mut attempted = Vec::new();
        let mut image = None;

        while let Some(url) = self.current().map(str::to_owned) {
            let attempt = match loader.load(&url) {
                Ok(decoded) => {
                    image = Some(decoded);
                    Attempt::Loaded
                }
                Err(e) => {
                    log::debug!("Image candidate {} failed: {:#}", url, e);
                    Attempt::Failed
                }
            };
            attempted.push(url);

            if let Some(outcome) = self.report(attempt) {
                match &outcome {
                    ResolveOutcome::Resolved(winner) => {
                        log::info!("Resolved image {} after {} attempt(s)", winner, attempted.len());
                    }
                    ResolveOutcome::Exhausted => {
                        log::warn!(
                            "No image candidate loaded after {} attempt(s), first tried {}",
                            attempted.len(),
                            attempted.first().map(String::as_str).unwrap_or("<none>")
                        );
                    }
                }
                return Resolution { outcome, image, attempted };
            }
        }

        // Already finished before this call
        Resolution {
            outcome: self.outcome().unwrap_or(ResolveOutcome::Exhausted),
            image: None,
            attempted,
        }
    }
}
