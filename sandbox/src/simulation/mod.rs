pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod collision;
pub mod response;
pub mod generator;
pub mod step;
pub mod scenario;
