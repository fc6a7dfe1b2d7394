//! The simulation world and its turn scheduler.
//!
//! [`World`] is the user-facing API. It is built once from a
//! [`WorldConfig`], owns its grid, legend, and random source, and advances
//! only when the caller invokes [`turn()`](World::turn).
//!
//! # Scheduling
//!
//! A turn walks the grid in row-major order, reading each cell as it is at
//! that moment. An agent moved forward in scan order will be met again
//! later in the same walk, so every agent is recorded in an acted set
//! (keyed by [`OccupantId`], not position) before it decides and is
//! skipped on any later encounter. Contested cells go to whoever reaches
//! them first in scan order.
//!
//! # Ownership model
//!
//! `World` is [`Send`] but is never shared: `turn()` takes `&mut self`, so
//! nothing can observe the grid while a turn is in progress.

use indexmap::IndexSet;
use std::fmt;
use tracing::{debug, info, trace};
use vivarium_agent::{Legend, Occupant, View};
use vivarium_core::{Action, Chooser, Coord, Direction, OccupantId, TurnId, EMPTY_SYMBOL};
use vivarium_space::Grid;

use crate::config::{ConfigError, WorldConfig};
use crate::report::{BlockReason, Outcome, TurnReport};
use crate::rng::SeededChooser;

// Compile-time assertion: World is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<World>();
    }
};

/// A grid of obstacles and agents advanced one turn at a time.
///
/// # Example
///
/// ```
/// use vivarium_agent::{Behavior, Legend, View};
/// use vivarium_core::{Action, Direction};
/// use vivarium_engine::{World, WorldConfig};
///
/// struct Eastward;
/// impl Behavior for Eastward {
///     fn name(&self) -> &str { "eastward" }
///     fn act(&mut self, _view: &mut View<'_>) -> Action { Action::Move(Direction::E) }
/// }
///
/// let legend = Legend::new()
///     .obstacle('#').unwrap()
///     .agent('>', |_| Eastward).unwrap();
/// let mut world = World::new(WorldConfig::new(["#>  #"], legend)).unwrap();
/// world.turn();
/// assert_eq!(world.render(), "# > #\n");
/// ```
pub struct World {
    grid: Grid<Occupant>,
    legend: Legend,
    chooser: Box<dyn Chooser>,
    turn: TurnId,
}

impl World {
    /// Build a world whose random source is seeded from `config.seed`.
    ///
    /// Validates the configuration and instantiates one occupant per
    /// non-blank map cell. Consumes the `WorldConfig`.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let chooser = SeededChooser::new(config.seed);
        Self::with_chooser(config, chooser)
    }

    /// Build a world that draws all randomness from `chooser`.
    ///
    /// `config.seed` is ignored.
    pub fn with_chooser<C>(config: WorldConfig, chooser: C) -> Result<Self, ConfigError>
    where
        C: Chooser + 'static,
    {
        config.validate()?;
        let (width, height) = config.dimensions()?;
        let WorldConfig { plan, legend, .. } = config;
        let mut chooser: Box<dyn Chooser> = Box::new(chooser);
        let mut grid = Grid::new(width, height)?;

        let mut next = 0u32;
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let occupant = legend
                    .spawn(symbol, OccupantId(next), &mut *chooser)
                    .ok_or(ConfigError::UnknownSymbol { symbol, x, y })?;
                grid.set(Coord::new(x as i32, y as i32), Some(occupant))?;
                next += 1;
            }
        }

        let agents = grid.iter_occupied().filter(|(_, o)| o.is_agent()).count();
        info!(width, height, occupants = next, agents, "world built");

        Ok(Self {
            grid,
            legend,
            chooser,
            turn: TurnId::default(),
        })
    }

    /// Read-only access to the grid.
    pub fn grid(&self) -> &Grid<Occupant> {
        &self.grid
    }

    /// The legend this world was built from.
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Number of completed turns.
    pub fn turn_id(&self) -> TurnId {
        self.turn
    }

    /// Number of occupants, obstacles included. Constant for the life of
    /// the world.
    pub fn occupant_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Number of occupants that act.
    pub fn agent_count(&self) -> usize {
        self.grid
            .iter_occupied()
            .filter(|(_, o)| o.is_agent())
            .count()
    }

    /// Current position and state of occupant `id`.
    pub fn occupant(&self, id: OccupantId) -> Option<(Coord, &Occupant)> {
        self.grid.iter_occupied().find(|(_, o)| o.id() == id)
    }

    /// Current position of occupant `id`.
    pub fn position_of(&self, id: OccupantId) -> Option<Coord> {
        self.occupant(id).map(|(at, _)| at)
    }

    /// Symbol shown at `at`: the occupant's symbol, [`EMPTY_SYMBOL`], or
    /// `None` outside the grid.
    pub fn symbol_at(&self, at: Coord) -> Option<char> {
        if !self.grid.is_inside(at) {
            return None;
        }
        Some(self.grid.get(at).map_or(EMPTY_SYMBOL, Occupant::symbol))
    }

    /// Advance the simulation by one turn.
    ///
    /// Never fails: every refused request degrades to the agent staying
    /// where it is, recorded as [`Outcome::Blocked`].
    pub fn turn(&mut self) -> TurnReport {
        let turn = self.turn.next();
        let mut acted: IndexSet<OccupantId> = IndexSet::new();
        let mut outcomes = Vec::new();

        for at in self.grid.coords() {
            let id = match self.grid.get(at) {
                Some(o) if o.is_agent() && !acted.contains(&o.id()) => o.id(),
                _ => continue,
            };
            acted.insert(id);
            if let Some(outcome) = self.let_act(turn, at) {
                outcomes.push((id, outcome));
            }
        }

        self.turn = turn;
        let report = TurnReport { turn, outcomes };
        debug!(
            turn = turn.0,
            acted = report.acted(),
            moved = report.moved(),
            blocked = report.blocked(),
            "turn complete"
        );
        report
    }

    /// Run `n` turns, returning each report.
    pub fn run(&mut self, n: usize) -> Vec<TurnReport> {
        (0..n).map(|_| self.turn()).collect()
    }

    /// Let the agent at `at` decide, then apply or discard its request.
    fn let_act(&mut self, turn: TurnId, at: Coord) -> Option<Outcome> {
        let src = self.grid.index_of(at)?;
        // Lift the occupant out so its behaviour can be borrowed mutably
        // while the view borrows the grid. A view never reports its own
        // cell, so the gap is invisible to the decision.
        let mut occupant = self.grid.take_index(src)?;
        let id = occupant.id();

        let action = match occupant.behavior_mut() {
            Some(behavior) => {
                let mut view = View::new(&self.grid, at, &mut *self.chooser);
                let action = behavior.act(&mut view);
                trace!(turn = turn.0, occupant = %id, behavior = behavior.name(), ?action, "decided");
                action
            }
            None => Action::Wait,
        };

        let (outcome, dst) = match self.resolve(at, &action) {
            Ok(Some((to, dst))) => (Outcome::Moved { from: at, to }, dst),
            Ok(None) => (Outcome::Waited { at }, src),
            Err(reason) => {
                debug!(turn = turn.0, occupant = %id, %at, %reason, "action discarded");
                (Outcome::Blocked { at, reason }, src)
            }
        };
        self.grid.place(dst, occupant);
        Some(outcome)
    }

    /// Validate `action` for an agent at `at`.
    ///
    /// `Ok(Some((coord, index)))` is a legal destination, `Ok(None)` means
    /// stay by choice.
    fn resolve(&self, at: Coord, action: &Action) -> Result<Option<(Coord, usize)>, BlockReason> {
        let direction = match action {
            Action::Move(d) => *d,
            Action::MoveNamed(name) => name
                .parse::<Direction>()
                .map_err(|e| BlockReason::UnknownDirection(e.name))?,
            Action::Wait => return Ok(None),
            Action::Unhandled(kind) => return Err(BlockReason::UnsupportedAction(kind.clone())),
        };
        let to = at + direction;
        let dst = self.grid.index_of(to).ok_or(BlockReason::OutOfBounds(to))?;
        if let Some(holder) = self.grid.get(to) {
            return Err(BlockReason::Occupied {
                at: to,
                by: holder.id(),
            });
        }
        Ok(Some((to, dst)))
    }

    /// Text form of the grid; see the [`Display`](fmt::Display) impl.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for World {
    /// One line per row, top to bottom, each exactly `width` symbols and
    /// terminated by `'\n'`. A freshly built world prints its plan.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.grid.width() as usize;
        for (i, at) in self.grid.coords().enumerate() {
            let symbol = self.grid.get(at).map_or(EMPTY_SYMBOL, Occupant::symbol);
            write!(f, "{symbol}")?;
            if (i + 1) % width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("turn", &self.turn)
            .field("occupants", &self.grid.occupied_count())
            .finish()
    }
}
