pub mod configuration;
pub mod error;
pub mod orchestration;
pub mod playback;
pub mod trajectory;
pub mod visualization;

pub use trajectory::states::{NVec2, Record, Trajectory};
pub use trajectory::loader::{load, load_path, RECORD_FIELDS};
pub use trajectory::kinematics::{project, transform, Position, PositionSeries};

pub use playback::driver::{FrameSink, Phase, Playback, PLAYBACK_DT};

pub use configuration::config::{
    parse_initial_conditions, SimulateConfig, DEFAULT_FILE_PATH, DEFAULT_INTEGRATOR,
    DEFAULT_ITERATIONS, DEFAULT_STEP_SIZE,
};

pub use error::SimError;

pub use orchestration::runner::{run_integrator, RunReport};

pub use visualization::dpsim_vis2d::run_viewer;
