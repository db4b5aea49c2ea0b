pub mod check;

pub use check::{run_check, CheckRun, NumberCheck};
