pub mod advisor;
pub mod client;
pub mod credentials;
pub mod prompts;

pub use advisor::*;
pub use client::*;
pub use credentials::*;
