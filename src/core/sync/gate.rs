/*!
 * Start Gate
 *
 * One-shot release used as the second phase of the start barrier: workers
 * block here after signalling ready, and the controller opens the gate once
 * every worker is parked, waking them all together.
 */

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Abandoned,
}

/// Outcome observed by a worker leaving [`StartGate::block`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passage {
    /// The controller released the gate; proceed with timed work
    Released,
    /// The run was aborted before release; skip timed work
    Abandoned,
}

/// One-shot start gate
pub struct StartGate {
    state: Mutex<GateState>,
    changed: Condvar,
}

impl StartGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Closed),
            changed: Condvar::new(),
        }
    }

    /// Release every blocked worker
    ///
    /// Returns `true` only for the call that actually opened the gate.
    pub fn open(&self) -> bool {
        self.transition(GateState::Open)
    }

    /// Wake blocked workers without releasing them into timed work
    ///
    /// Has no effect on a gate that was already opened.
    pub fn abandon(&self) -> bool {
        self.transition(GateState::Abandoned)
    }

    /// Block until the gate is opened or abandoned
    pub fn block(&self) -> Passage {
        let mut state = self.state.lock();
        loop {
            match *state {
                GateState::Closed => self.changed.wait(&mut state),
                GateState::Open => return Passage::Released,
                GateState::Abandoned => return Passage::Abandoned,
            }
        }
    }

    pub fn is_open(&self) -> bool {
        *self.state.lock() == GateState::Open
    }

    fn transition(&self, to: GateState) -> bool {
        let mut state = self.state.lock();
        if *state != GateState::Closed {
            return false;
        }
        *state = to;
        self.changed.notify_all();
        true
    }
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}
