pub mod api;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod error;
pub mod geometry;
pub mod optimizer;
pub mod scenario;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).
