pub mod cli;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
