pub mod collision;
pub mod kinematics;
pub mod scoring;
pub mod targeting;

pub use collision::*;
pub use kinematics::*;
pub use scoring::*;
pub use targeting::*;
