//! Background image resolution.
//!
//! Each panel gets its own worker thread that walks the panel's candidate
//! paths strictly in order, so a slow or hanging candidate only stalls that
//! panel. Layout never waits on these workers; results are drained once per
//! frame with [`AsyncResolver::check_completion`].

use accordion::{DecodedImage, ImageLoader, ImageResolver, ResolveOutcome};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use crate::io::ResolutionState;

/// Loader shared by every worker thread.
pub type SharedLoader = Arc<dyn ImageLoader + Send + Sync>;

/// Terminal result of resolving one panel's image.
pub struct ResolvedImage {
    /// Index of the panel within the menu that requested it
    pub panel_index: usize,
    pub outcome: ResolveOutcome,
    /// Decoded pixels of the winning candidate
    pub image: Option<DecodedImage>,
}

/// Runs image resolvers on background threads and collects their outcomes.
///
/// Results are tagged with the generation they were started in; mounting a
/// new menu bumps the generation so late results for the old menu are dropped.
pub struct AsyncResolver {
    /// Shared worker counter
    state: Arc<Mutex<ResolutionState>>,

    sender: Sender<(u64, ResolvedImage)>,
    receiver: Receiver<(u64, ResolvedImage)>,

    generation: u64,

    loader: SharedLoader,
}

impl AsyncResolver {
    /// Creates a resolver runner that loads candidates through `loader`.
    pub fn new(loader: SharedLoader) -> Self {
        let (sender, receiver) = channel();
        Self {
            state: Arc::new(Mutex::new(ResolutionState::new())),
            sender,
            receiver,
            generation: 0,
            loader,
        }
    }

    /// Number of workers still attempting candidates.
    pub fn in_flight(&self) -> usize {
        self.state.lock().map(|state| state.in_flight).unwrap_or(0)
    }

    /// Checks if any resolution is still running.
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Forgets every outstanding resolution and switches to a new loader.
    ///
    /// Workers already running finish in the background; their results are discarded.
    pub fn reset(&mut self, loader: SharedLoader) {
        self.generation += 1;
        self.loader = loader;
    }

    /// Starts resolving one panel's image on a worker thread.
    ///
    /// # Arguments
    /// * `panel_index` - Panel the result belongs to
    /// * `resolver` - Resolver positioned on the panel's first candidate
    /// * `ctx` - egui context to wake when the result is ready
    pub fn start(&mut self, panel_index: usize, mut resolver: ImageResolver, ctx: Option<&egui::Context>) {
        {
            if let Ok(mut state) = self.state.lock() {
                state.in_flight += 1;
            }
        }

        let state = Arc::clone(&self.state);
        let loader = Arc::clone(&self.loader);
        let sender = self.sender.clone();
        let generation = self.generation;
        let ctx_handle = ctx.cloned();

        thread::spawn(move || {
            let resolution = resolver.resolve(loader.as_ref());

            let _ = sender.send((
                generation,
                ResolvedImage {
                    panel_index,
                    outcome: resolution.outcome,
                    image: resolution.image,
                },
            ));

            {
                if let Ok(mut state) = state.lock() {
                    state.in_flight = state.in_flight.saturating_sub(1);
                }
            }

            if let Some(ctx) = ctx_handle {
                ctx.request_repaint();
            }
        });
    }

    /// Drains every result that arrived since the last call.
    ///
    /// This should be called once per frame in the update loop.
    pub fn check_completion(&mut self) -> Vec<ResolvedImage> {
        let mut completed = Vec::new();
        while let Ok((generation, result)) = self.receiver.try_recv() {
            if generation == self.generation {
                completed.push(result);
            } else {
                log::debug!("Dropping stale image result for panel {}", result.panel_index);
            }
        }
        completed
    }
}
