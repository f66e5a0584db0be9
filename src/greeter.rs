use log::debug;
use std::fmt;
use std::io::{self, Write};

/// The subject of a greeting line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting<'a> {
    World,
    Name(&'a str),
}

impl<'a> Greeting<'a> {
    /// Absent and empty names both fall back to `World`.
    pub fn new(name: Option<&'a str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => Greeting::Name(name),
            _ => Greeting::World,
        }
    }
}

impl fmt::Display for Greeting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::World => write!(f, "Hello, World!"),
            Greeting::Name(name) => write!(f, "Hello, {}!", name),
        }
    }
}

pub fn greeting(name: Option<&str>) -> String {
    Greeting::new(name).to_string()
}

/// Writes the greeting line, newline included, to `writer`.
pub fn write_greeting<W: Write>(writer: &mut W, name: Option<&str>) -> io::Result<()> {
    let greeting = Greeting::new(name);
    debug!("Greeting line: {}", greeting);
    writeln!(writer, "{}", greeting)
}

/// Prints the greeting line to stdout.
pub fn greet(name: Option<&str>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle, name)?;
    handle.flush()
}
