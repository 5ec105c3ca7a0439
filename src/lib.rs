pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::{SimError, SimResult};
pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::trail::{Trail, DEFAULT_TRAIL_CAPACITY};
pub use simulation::params::{Parameters, AU, DAY, G};
pub use simulation::engine::Engine;
pub use simulation::forces::{Attraction, ForceFault};
pub use simulation::integrator::{sequential_euler, simultaneous_euler};
pub use simulation::scenario::Simulation;

pub use configuration::config::{UpdateOrderConfig, DistanceUnit, EngineConfig, ParametersConfig, ViewerConfig, BodyConfig, ScenarioConfig};

pub use visualization::{vis2d::{run_2d, world_to_screen, FrameClock}, report::run_headless};

pub use benchmark::benchmark::bench_step;
