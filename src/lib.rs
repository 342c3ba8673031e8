pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod presentation;
pub mod scene;
pub mod session;
pub mod timer;
