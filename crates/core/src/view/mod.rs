pub mod controller;
pub mod renderer;
