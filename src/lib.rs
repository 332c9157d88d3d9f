pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod generators;
pub mod maze;
pub mod solvers;
