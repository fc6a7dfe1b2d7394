//! The classic demo world: a walled room with bouncers and wall followers.

use crate::bouncer::Bouncer;
use crate::wall_follower::WallFollower;
use vivarium_agent::{Legend, LegendError};

/// Obstacle symbol.
pub const WALL: char = '#';
/// [`Bouncer`] symbol.
pub const BOUNCER: char = 'o';
/// [`WallFollower`] symbol.
pub const WALL_FOLLOWER: char = '~';

/// A 28×12 walled room with four bouncers and three wall followers.
pub const REFERENCE_PLAN: [&str; 12] = [
    "############################",
    "# ~    #    #      o       #",
    "#                          #",
    "#          #####           #",
    "##         #   #    ##     #",
    "###           ##     #    ~#",
    "#           ###      #     #",
    "#   ####                   #",
    "#   ##       o             #",
    "# o  #         o       ### #",
    "#    #                    ~#",
    "############################",
];

/// Legend for [`REFERENCE_PLAN`]: walls, bouncers, and wall followers,
/// each critter starting with a random heading.
pub fn reference_legend() -> Result<Legend, LegendError> {
    Legend::new()
        .obstacle(WALL)?
        .agent(BOUNCER, Bouncer::new)?
        .agent(WALL_FOLLOWER, WallFollower::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivarium_core::OccupantId;
    use vivarium_test_utils::FirstChoice;

    #[test]
    fn plan_rows_are_equal_length() {
        assert!(REFERENCE_PLAN.iter().all(|r| r.chars().count() == 28));
    }

    #[test]
    fn legend_covers_every_plan_symbol() {
        let legend = reference_legend().unwrap();
        for row in REFERENCE_PLAN {
            for ch in row.chars().filter(|&c| c != ' ') {
                assert!(legend.contains(ch), "unbound symbol {ch:?}");
            }
        }
    }

    #[test]
    fn legend_spawns_named_behaviours() {
        let legend = reference_legend().unwrap();
        let mut chooser = FirstChoice;
        let o = legend.spawn(BOUNCER, OccupantId(0), &mut chooser).unwrap();
        let w = legend.spawn(WALL_FOLLOWER, OccupantId(1), &mut chooser).unwrap();
        let wall = legend.spawn(WALL, OccupantId(2), &mut chooser).unwrap();
        assert_eq!(o.behavior().map(|b| b.name()), Some("bouncer"));
        assert_eq!(w.behavior().map(|b| b.name()), Some("wall_follower"));
        assert!(!wall.is_agent());
    }
}
