pub mod states;
pub mod loader;
pub mod kinematics;
