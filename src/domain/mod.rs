pub mod color;
pub mod config;
pub mod particle;

pub use color::Rgb;
pub use config::EngineConfig;
pub use particle::ParticleStore;
