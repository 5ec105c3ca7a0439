use orbitsim::{DistanceUnit, NVec2, ScenarioConfig, SimError, Simulation, UpdateOrderConfig};
use orbitsim::{AU, DAY, DEFAULT_TRAIL_CAPACITY, G};

const SOLAR_SYSTEM: &str = include_str!("../scenarios/solar_system.yaml");
const EARTH_SUN: &str = include_str!("../scenarios/earth_sun.yaml");

/// Parse a scenario that is expected to be well-formed YAML
pub fn parse(yaml: &str) -> ScenarioConfig {
    ScenarioConfig::from_yaml_str(yaml).expect("scenario should parse")
}

#[test]
fn solar_system_file_matches_builtin_scenario() {
    let mut from_file = parse(SOLAR_SYSTEM).build_simulation().unwrap();
    let mut builtin = Simulation::solar_system();

    assert_eq!(from_file.reference(), Some(0));
    assert_eq!(from_file.bodies().len(), 5);

    from_file.run(100).unwrap();
    builtin.run(100).unwrap();

    for (a, b) in from_file.bodies().iter().zip(builtin.bodies()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.color(), b.color());
        assert_eq!(a.radius(), b.radius());
        assert_eq!(a.position(), b.position());
        assert_eq!(a.velocity(), b.velocity());
        assert_eq!(a.distance_to_reference(), b.distance_to_reference());
    }
}

#[test]
fn earth_sun_file_uses_defaults_and_unbounded_trails() {
    let cfg = parse(EARTH_SUN);

    assert_eq!(cfg.engine.update_order, UpdateOrderConfig::Simultaneous);
    assert_eq!(cfg.parameters.G, G);
    assert_eq!(cfg.parameters.trail_capacity, None);
    assert_eq!(cfg.parameters.distance_unit, DistanceUnit::AstronomicalUnits);
    assert_eq!(cfg.viewer.pixels_per_au, 225.0);

    let sim = cfg.build_simulation().unwrap();
    assert_eq!(sim.bodies()[1].position(), NVec2::new(-AU, 0.0));
    assert_eq!(sim.bodies()[0].velocity(), NVec2::zeros());
    assert_eq!(sim.bodies()[1].trail().capacity(), None);
}

#[test]
fn minimal_scenario_takes_defaults() {
    let cfg = parse(
        r#"
bodies:
  - x: [0.0, 0.0]
    m: 1.0e30
  - x: [1.0e11, 0.0]
    v: [0.0, 30000.0]
    m: 1.0e24
"#,
    );

    assert_eq!(cfg.engine.update_order, UpdateOrderConfig::Sequential);
    assert_eq!(cfg.parameters.distance_unit, DistanceUnit::Meters);
    assert_eq!(cfg.parameters.timestep, DAY);

    let sim = cfg.build_simulation().unwrap();
    assert_eq!(sim.reference(), None);
    assert_eq!(sim.parameters().trail_capacity, Some(DEFAULT_TRAIL_CAPACITY));
    assert_eq!(sim.bodies()[1].position(), NVec2::new(1.0e11, 0.0));
    assert_eq!(sim.bodies()[0].color(), [255, 255, 255]);
    assert_eq!(sim.bodies()[0].name(), None);
}

#[test]
fn two_reference_bodies_rejected() {
    let cfg = parse(
        r#"
bodies:
  - x: [0.0, 0.0]
    m: 1.0e30
    reference: true
  - x: [1.0e11, 0.0]
    m: 1.0e30
    reference: true
"#,
    );

    assert_eq!(cfg.build_simulation().unwrap_err(), SimError::MultipleReferences { first: 0, second: 1 });
}

#[test]
fn three_component_position_rejected() {
    let cfg = parse(
        r#"
bodies:
  - x: [0.0, 0.0, 0.0]
    m: 1.0e30
"#,
    );

    assert_eq!(cfg.build_simulation().unwrap_err(), SimError::InvalidVector { body: 0, field: "x", len: 3 });
}

#[test]
fn negative_mass_rejected() {
    let cfg = parse(
        r#"
bodies:
  - x: [0.0, 0.0]
    m: -5.0
"#,
    );

    assert_eq!(cfg.build_simulation().unwrap_err(), SimError::InvalidMass { mass: -5.0 });
}

#[test]
fn zero_gravitational_constant_rejected() {
    let cfg = parse(
        r#"
parameters:
  G: 0.0
bodies:
  - x: [0.0, 0.0]
    m: 1.0
"#,
    );

    assert_eq!(cfg.build_simulation().unwrap_err(), SimError::InvalidGravitationalConstant(0.0));
}

#[test]
fn unknown_update_order_is_a_parse_error() {
    let res = ScenarioConfig::from_yaml_str(
        r#"
engine:
  update_order: "rk4"
bodies: []
"#,
    );

    assert!(res.is_err());
}
