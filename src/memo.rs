//! Single-slot memoization keyed on input identity.

use std::sync::Arc;
use tracing::debug;

/// Caches the output computed for the last input, keyed by the input's
/// `Arc` pointer. Holding the input alive keeps the pointer from being
/// reused by a different value.
pub struct Memo<I: ?Sized, O> {
    slot: Option<(Arc<I>, Arc<O>)>,
}

impl<I: ?Sized, O> Default for Memo<I, O> {
    fn default() -> Self {
        Memo { slot: None }
    }
}

impl<I: ?Sized, O> Memo<I, O> {
    /// Return the cached output if `input` is the same allocation as last
    /// time, otherwise compute, cache and return a fresh one.
    pub fn get_or_compute(&mut self, input: &Arc<I>, compute: impl FnOnce(&I) -> O) -> Arc<O> {
        if let Some((cached_input, output)) = &self.slot {
            if Arc::ptr_eq(cached_input, input) {
                debug!("reusing memoized view");
                return Arc::clone(output);
            }
        }
        let output = Arc::new(compute(input.as_ref()));
        self.slot = Some((Arc::clone(input), Arc::clone(&output)));
        output
    }
}
