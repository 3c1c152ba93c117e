//! Colored console status lines, mirrored to the log

use colored::Colorize;

pub fn print_success(message: &str) {
    log::info!("{message}");
    println!("{}", message.green());
}

pub fn print_error(message: &str) {
    log::error!("{message}");
    println!("{}", message.red());
}

pub fn print_info(message: &str) {
    log::info!("{message}");
    println!("{}", message.yellow());
}
