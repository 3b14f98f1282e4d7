pub mod cli_args;
pub mod formatter;
pub mod guide_client;

pub use cli_args::{ClientArgs, Demo};
pub use formatter::OutputFormatter;
pub use guide_client::{sample_route, GuideClient};
