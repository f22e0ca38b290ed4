//! Basic usage of the default logger and logger instances
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{debug, error, info};
use std::fmt;

#[derive(Debug)]
struct FrameworkError {
    reason: &'static str,
    frames: Vec<&'static str>,
}

impl fmt::Display for FrameworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)?;
        for frame in &self.frames {
            write!(f, "\n  at {}", frame)?;
        }
        Ok(())
    }
}

impl std::error::Error for FrameworkError {}

fn load_plugin() -> std::result::Result<(), FrameworkError> {
    Err(FrameworkError {
        reason: "BOOM!!! plugin failed to load",
        frames: vec!["demos/basic_usage.rs:load_plugin", "demos/basic_usage.rs:main"],
    })
}

fn main() {
    facade::info("Hello world!");
    debug!("Hello world {} times!", 42); // hidden, threshold is Info
    facade::error("Hello world!");

    println!("\n===== 1 =====\n");
    facade::set_level(LogLevel::Debug);

    info!("Hello {}!", "world");
    debug!("Hello world {} times!", 42);
    error!("Hello {:x}!", 123);

    println!("\n===== 2 =====\n");
    facade::set_renderer(
        LogLevel::Info,
        render_fn(|out, record| writeln!(out, ">>  My custom Info  ||  {}", record.message)),
    );

    for word in ["Some", "AMAZING", "log", "entries"] {
        facade::info(word);
    }
    facade::debug("Boring");
    facade::error("Lame");

    println!("\n===== 3 =====\n");
    if let Err(err) = load_plugin() {
        facade::log_stack(&err);
    }

    println!("\n===== 4 =====\n");
    facade::reset();
    facade::set_date_format("%d.%m.%Y at %H:%M:%S");

    let request = facade::new_logger_with_level(LogLevel::Debug);
    request.info("request accepted");
    request.debug_fmt(format_args!("{} rows loaded", 17));
    request.warn("request slow");

    facade::fatal_check(load_plugin());
}
