mod greeter;
pub use crate::greeter::*;

mod output;
pub use crate::output::*;
