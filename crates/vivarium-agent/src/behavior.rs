//! The [`Behavior`] trait.
//!
//! A behaviour is the decision capability of an agent. It owns whatever
//! private memory the agent needs and is asked once per turn, through a
//! [`View`], what it wants to do.

use crate::view::View;
use vivarium_core::Action;

/// Decision capability of an agent.
///
/// # Contract
///
/// - `act()` is called at most once per turn for a given agent.
/// - `act()` must terminate; the scheduler has no timeout.
/// - The returned [`Action`] is a request. The world may refuse it, in
///   which case the agent stays put and nothing else happens.
/// - All randomness goes through [`View::chooser`] so runs replay from a
///   seed.
///
/// # Object safety
///
/// This trait is object-safe; occupants store behaviours as
/// `Box<dyn Behavior>`.
///
/// # Examples
///
/// A behaviour that always heads north:
///
/// ```
/// use vivarium_agent::{Behavior, View};
/// use vivarium_core::{Action, Direction};
///
/// struct Northbound;
///
/// impl Behavior for Northbound {
///     fn name(&self) -> &str { "northbound" }
///
///     fn act(&mut self, _view: &mut View<'_>) -> Action {
///         Action::Move(Direction::N)
///     }
/// }
///
/// assert_eq!(Northbound.name(), "northbound");
/// ```
pub trait Behavior: Send + 'static {
    /// Human-readable name for logging and debugging.
    fn name(&self) -> &str;

    /// Observe the surroundings and request an action for this turn.
    fn act(&mut self, view: &mut View<'_>) -> Action;
}
