//! Request interception: an ordered rule set consulted before the network.
//!
//! The interceptor is an explicitly constructed instance injected into the
//! transport stack. While active it answers matched requests from its rules;
//! everything else passes through to the real transport. Matching takes a
//! read lock and is a pure lookup; only the lifecycle operations
//! (`activate`, `reset`, `deactivate`) take the write lock, so a dispatched
//! request observes either the old or the new rule set, never a mix.

pub mod handlers;
mod rules;


pub use rules::{MockRequest, MockResponse, MockRule, Responder, UrlPattern};

use parking_lot::RwLock;
use std::time::Duration;
use tracing::debug;

enum RuleSet {
    Inactive,
    Active {
        rules: Vec<MockRule>,
        /// The set passed to `activate`, restored by a bare `reset()`.
        seed: Vec<MockRule>,
    },
}

/// Instance-scoped interception layer.
pub struct Interceptor {
    state: RwLock<RuleSet>,
    delay: Option<Duration>,
}

impl Interceptor {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RuleSet::Inactive),
            delay: None,
        }
    }

    /// Fixed latency added to every mock response. Zero disables the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = if delay.is_zero() { None } else { Some(delay) };
        self
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    pub fn is_active(&self) -> bool {
        matches!(*self.state.read(), RuleSet::Active { .. })
    }

    pub fn rule_count(&self) -> usize {
        match &*self.state.read() {
            RuleSet::Active { rules, .. } => rules.len(),
            RuleSet::Inactive => 0,
        }
    }

    /// Install a rule set and remember it as the seed for `reset()`.
    /// Calling while already active is a no-op, not a duplicate registration.
    pub fn activate(&self, rules: Vec<MockRule>) {
        let mut state = self.state.write();
        if matches!(*state, RuleSet::Active { .. }) {
            debug!("Interception already active, ignoring activate");
            return;
        }
        debug!("Interception activated with {} rules", rules.len());
        *state = RuleSet::Active {
            seed: rules.clone(),
            rules,
        };
    }

    /// Replace the active rules with `new_rules`, or restore the activation
    /// seed when none is supplied. No-op while inactive.
    pub fn reset(&self, new_rules: Option<Vec<MockRule>>) {
        let mut state = self.state.write();
        if let RuleSet::Active { rules, seed } = &mut *state {
            *rules = new_rules.unwrap_or_else(|| seed.clone());
            debug!("Interception rules reset ({} active)", rules.len());
        }
    }

    /// Remove all interception. Subsequent requests reach the real
    /// transport. Idempotent.
    pub fn deactivate(&self) {
        let mut state = self.state.write();
        if matches!(*state, RuleSet::Active { .. }) {
            debug!("Interception deactivated");
        }
        *state = RuleSet::Inactive;
    }

    /// Walk the rules in registration order and run the first match.
    /// Returns `None` when inactive or when nothing matches, in which case
    /// the caller passes the request through.
    pub fn match_request(&self, url: &str, path: &str) -> Option<MockResponse> {
        let state = self.state.read();
        let RuleSet::Active { rules, .. } = &*state else {
            return None;
        };
        for (index, rule) in rules.iter().enumerate() {
            if let Some(response) = rule.apply(url, path) {
                debug!(
                    "Intercepted {} with rule {} (status {})",
                    path, index, response.status
                );
                return Some(response);
            }
        }
        debug!("No interception rule matched {}, passing through", path);
        None
    }
}

impl Default for Interceptor {
    fn default() -> Self {
        Self::new()
    }
}
