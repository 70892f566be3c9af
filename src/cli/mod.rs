pub mod args;
pub mod pipeline;

pub use args::Args;
pub use pipeline::Pipeline;
