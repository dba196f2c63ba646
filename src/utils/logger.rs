use std::fmt::Arguments;

pub trait Logger {
    fn print(&mut self, value: Arguments);
}

pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn print(&mut self, value: Arguments) {
        println!("{}", value)
    }
}

pub fn report(logger: &mut dyn Logger, line: Option<usize>, location: &str, message: &str) {
    match line {
        Some(line) => logger.print(format_args!("[line {}] Error{}: {}", line, location, message)),
        None => logger.print(format_args!("Error{}: {}", location, message)),
    }
}
