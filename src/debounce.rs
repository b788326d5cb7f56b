//! Debounced Input
//!
//! Trailing-edge debounce for text inputs. Every keystroke restarts the
//! timer; only the value present when the timer finally fires is
//! published. [`DebounceGate`] holds the restart bookkeeping so the
//! timer wiring stays thin.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Quiet period before a pending value is published
pub const DEBOUNCE_MS: u32 = 500;

/// Generation counter separating live timers from superseded ones.
///
/// Each keystroke bumps the generation; a timer fires usefully only if
/// no newer keystroke arrived while it waited.
#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: u64,
    pending: Option<String>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new raw value. Returns the generation token the caller
    /// must present back when its timer fires.
    pub fn arm(&mut self, value: String) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// A timer armed with `token` has fired. Returns the value to
    /// publish, or None if a newer keystroke superseded the timer.
    pub fn fire(&mut self, token: u64) -> Option<String> {
        if token == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending value without publishing it.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Wire a raw input signal to a debounced output signal.
///
/// Returns the callback to attach to `on:input`. The pending timeout is
/// cancelled when the owning scope is disposed.
pub fn use_debounced(set_debounced: WriteSignal<String>) -> impl Fn(String) + Clone {
    let gate = Rc::new(RefCell::new(DebounceGate::new()));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    {
        let gate = leptos::__reexports::send_wrapper::SendWrapper::new(gate.clone());
        let timer = leptos::__reexports::send_wrapper::SendWrapper::new(timer.clone());
        on_cleanup(move || {
            gate.borrow_mut().cancel();
            if let Some(t) = timer.borrow_mut().take() {
                t.cancel();
            }
        });
    }

    move |value: String| {
        let token = gate.borrow_mut().arm(value);
        let gate_for_timer = gate.clone();
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            if let Some(v) = gate_for_timer.borrow_mut().fire(token) {
                set_debounced.set(v);
            }
        });
        if let Some(old) = timer.borrow_mut().replace(timeout) {
            old.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_value_survives_rapid_typing() {
        let mut gate = DebounceGate::new();
        let t1 = gate.arm("a".to_string());
        let t2 = gate.arm("ab".to_string());
        let t3 = gate.arm("abc".to_string());

        assert_eq!(gate.fire(t1), None);
        assert_eq!(gate.fire(t2), None);
        assert_eq!(gate.fire(t3), Some("abc".to_string()));
    }

    #[test]
    fn fire_consumes_pending_value() {
        let mut gate = DebounceGate::new();
        let t = gate.arm("q".to_string());
        assert_eq!(gate.fire(t), Some("q".to_string()));
        assert_eq!(gate.fire(t), None);
    }

    #[test]
    fn cancel_discards_pending() {
        let mut gate = DebounceGate::new();
        let t = gate.arm("stale".to_string());
        gate.cancel();
        assert_eq!(gate.fire(t), None);
    }

    #[test]
    fn quiet_period_then_new_input_publishes_both() {
        let mut gate = DebounceGate::new();
        let t1 = gate.arm("first".to_string());
        assert_eq!(gate.fire(t1), Some("first".to_string()));

        let t2 = gate.arm("second".to_string());
        assert_eq!(gate.fire(t2), Some("second".to_string()));
    }
}
