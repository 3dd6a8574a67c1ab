use halite_agent::config::NavigationConfig;
use halite_agent::planner::{PlanError, TurnPlanner};
use halite_core::commands::Command;
use halite_core::planet::Planet;
use halite_core::ship::Ship;
use halite_core::types::Coordinate;
use halite_map::game_map::GameMap;

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

/// Our ships 0 and 1, an enemy ship 2, one free planet.
fn make_map() -> GameMap {
    let ships = vec![
        Ship::new(0, 0, c(0.0, 0.0), 255),
        Ship::new(0, 1, c(17.0, 10.0), 255),
        Ship::new(1, 2, c(150.0, 150.0), 255),
    ];
    let planets = vec![Planet::new(5, c(60.0, 60.0), 2000, 6.0, 3)];
    GameMap::new(0, 240, 160, ships, planets)
}

fn thrust(ship_id: u32, magnitude: u32, heading: i32) -> Command {
    Command::Thrust {
        ship_id,
        magnitude,
        heading,
    }
}

#[test]
fn test_single_move_reserves_position() {
    let map = make_map();
    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());

    let command = planner.navigate_to(0, c(10.0, 0.0)).unwrap();
    assert_eq!(command, Some(thrust(0, 7, 0)));

    // Projected from the target along the heading
    assert_eq!(planner.reservations().get(0), Some(c(17.0, 0.0)));
}

/// Ship 1 flying straight down x = 17 would cross ship 0's reserved
/// position, so it swings counter-clockwise until the path clears.
#[test]
fn test_later_ship_avoids_earlier_reservation() {
    let map = make_map();

    // Alone, ship 1 flies straight
    let mut alone = TurnPlanner::new(&map, NavigationConfig::default());
    assert_eq!(
        alone.navigate_to(1, c(17.0, -10.0)).unwrap(),
        Some(thrust(1, 7, 270))
    );

    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());
    planner.navigate_to(0, c(10.0, 0.0)).unwrap();
    let command = planner.navigate_to(1, c(17.0, -10.0)).unwrap();

    // 7 one-degree corrections put 1.22 units between the path and the reservation
    assert_eq!(command, Some(thrust(1, 7, 277)));
}

#[test]
fn test_exhausted_budget_records_nothing() {
    let map = make_map();
    let config = NavigationConfig {
        max_corrections: 0,
        ..NavigationConfig::default()
    };
    let mut planner = TurnPlanner::new(&map, config);

    assert_eq!(planner.navigate_to(0, c(10.0, 0.0)).unwrap(), None);
    assert!(planner.reservations().is_empty());

    let orders = planner.finish();
    assert!(orders.commands.is_empty());
    assert_eq!(orders.encode(), "");
}

#[test]
fn test_approach_planet() {
    let map = make_map();
    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());

    let command = planner.approach(0, 5, 3.0).unwrap();
    // Diagonal toward the planet at (60, 60)
    assert_eq!(command, Some(thrust(0, 7, 45)));

    assert_eq!(planner.approach(1, 42, 3.0), Err(PlanError::UnknownPlanet(42)));
}

#[test]
fn test_dock_and_undock_hold_position() {
    let map = make_map();
    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());

    assert_eq!(
        planner.dock(0, 5),
        Ok(Command::Dock {
            ship_id: 0,
            planet_id: 5
        })
    );
    assert_eq!(planner.undock(1), Ok(Command::Undock { ship_id: 1 }));
    assert_eq!(planner.reservations().get(0), Some(c(0.0, 0.0)));
    assert_eq!(planner.reservations().get(1), Some(c(17.0, 10.0)));

    assert_eq!(planner.dock(0, 5), Err(PlanError::AlreadyOrdered(0)));
}

#[test]
fn test_order_errors() {
    let map = make_map();
    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());

    assert_eq!(planner.navigate_to(9, c(1.0, 1.0)), Err(PlanError::UnknownShip(9)));
    assert_eq!(planner.navigate_to(2, c(1.0, 1.0)), Err(PlanError::NotOurs(2)));
    assert_eq!(planner.dock(0, 77), Err(PlanError::UnknownPlanet(77)));

    planner.navigate_to(0, c(10.0, 0.0)).unwrap();
    assert_eq!(
        planner.navigate_to(0, c(20.0, 0.0)),
        Err(PlanError::AlreadyOrdered(0))
    );
    assert_eq!(planner.commands().len(), 1);
}

#[test]
fn test_encode_turn() {
    let map = make_map();
    let mut planner = TurnPlanner::new(&map, NavigationConfig::default());
    planner.navigate_to(0, c(3.0, 0.0)).unwrap();
    planner.dock(1, 5).unwrap();

    let orders = planner.finish();
    assert_eq!(orders.encode(), "t 0 3 0\nd 1 5");
    assert_eq!(orders.reservations.len(), 2);

    for line in orders.encode().lines() {
        assert!(line.parse::<Command>().is_ok(), "bad line {line}");
    }
}
