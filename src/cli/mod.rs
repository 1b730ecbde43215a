mod args;
mod browse;
mod generate;
mod render;
mod root;

pub use root::Cli;
