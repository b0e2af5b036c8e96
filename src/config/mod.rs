//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, InputConfig, OutputConfig, OutputFormat, CliOverrides, InputSource,
    DEFAULT_GENERATIONS, DEFAULT_OUTPUT_SUFFIX, DEFAULT_JSON_OUTPUT_SUFFIX,
};
