//! Driving the simulator from a per-frame callback facility.
//!
//! The host (a window's redraw loop, a test, a headless runner) implements
//! [`FrameScheduler`]. A [`FrameLoop`] keeps at most one frame requested while it
//! runs and ticks the simulator once each time that frame fires.

use crate::simulator::components::nodes::StateStore;
use crate::simulator::Simulator;
use log::info;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Arc;

/// A facility that calls back once per frame, like a display's animation frame
/// request.
pub trait FrameScheduler {
    /// Identifies one requested frame.
    type Handle: PartialEq;

    /// Ask for a callback on the next frame.
    fn request_frame(&mut self) -> Self::Handle;

    /// Withdraw a request made by [`request_frame`](Self::request_frame).
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Start/stop control over a simulator's frame-driven ticks.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Request the first frame. Does nothing if already running.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        info!("Simulation started");
        self.pending = Some(self.scheduler.request_frame());
    }

    /// Cancel the pending frame so no further ticks happen. Does nothing if
    /// already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            info!("Simulation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle the frame `fired` from the scheduler.
    ///
    /// Ticks `simulator` and requests the next frame if `fired` is the frame
    /// this loop is waiting for. Stale or cancelled frames are ignored and
    /// return `None`.
    pub fn frame<R: Rng>(
        &mut self,
        fired: S::Handle,
        simulator: &mut Simulator<R>,
    ) -> Option<Arc<StateStore>> {
        if self.pending.as_ref() != Some(&fired) {
            return None;
        }
        let state = simulator.tick();
        self.pending = Some(self.scheduler.request_frame());
        Some(state)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl FrameLoop<ManualScheduler> {
    /// Fire the oldest requested frame, if any.
    pub fn run_pending<R: Rng>(&mut self, simulator: &mut Simulator<R>) -> Option<Arc<StateStore>> {
        let fired = self.scheduler.next_frame()?;
        self.frame(fired, simulator)
    }
}

/// A scheduler whose frames fire only when asked to, for headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queued: VecDeque<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requested frames that have not fired yet.
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    /// Pop the oldest requested frame.
    pub fn next_frame(&mut self) -> Option<u64> {
        self.queued.pop_front()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.queued.push_back(id);
        id
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.queued.retain(|id| *id != handle);
    }
}
