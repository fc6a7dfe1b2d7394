//! The [`Chooser`] trait: uniform random selection as an injectable seam.
//!
//! Behaviours never reach for a global RNG. Every random decision goes
//! through a `Chooser` owned by the world, so a run is reproducible from its
//! seed and tests can substitute a deterministic picker.

/// Picks one index out of `len` candidates.
///
/// # Contract
///
/// - Only called with `len > 0`.
/// - Must return a value in `0..len`. Out-of-range answers are wrapped
///   by [`choose`] rather than trusted.
/// - Production implementations should be uniform.
pub trait Chooser: Send {
    /// Pick an index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for Box<C> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Pick one element of `items` through `chooser`, or `None` if empty.
pub fn choose<'a, T, C>(chooser: &mut C, items: &'a [T]) -> Option<&'a T>
where
    C: Chooser + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let idx = chooser.pick(items.len()) % items.len();
    items.get(idx)
}
