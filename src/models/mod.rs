pub mod sonar;
pub mod trivy;

pub use sonar::*;
pub use trivy::*;
