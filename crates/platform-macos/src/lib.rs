mod applescript;

pub use applescript::{applescript_escape, run_applescript};
