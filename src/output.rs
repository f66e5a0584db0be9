use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::greeter::write_greeting;

pub fn get_target_output_writable(output_file: Option<&Path>) -> io::Result<Box<dyn Write>> {
    let write_target: Box<dyn Write> = match output_file {
        Some(filename) => Box::new(File::create(filename)?),
        None => {
            let stdout = io::stdout();
            Box::new(stdout)
        }
    };
    Ok(write_target)
}

pub fn output_greeting(name: Option<&str>, output_file: Option<&Path>) -> io::Result<()> {
    if let Some(path) = output_file {
        info!("Writing greeting to {}", path.display());
    }
    let mut writer = BufWriter::new(get_target_output_writable(output_file)?);
    write_greeting(&mut writer, name)?;
    writer.flush()
}
