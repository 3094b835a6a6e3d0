extern crate termcolor;

use std::{
    fmt,
    io::{self, Write},
};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

/// Picks the label color of a console line.
#[derive(Clone, Copy, Debug)]
pub enum Tone {
    Ok,
    Info,
    Warn,
    Error,
}
impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Ok => Color::Green,
            Tone::Info => Color::Blue,
            Tone::Warn => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

/// Writes `label` right aligned in its tone, then the message in the default color.
pub fn write_line(
    stdout: &mut StandardStream,
    tone: Tone,
    label: &str,
    message: fmt::Arguments,
) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(tone.color())).set_intense(true))?;
    write!(stdout, "{:>7}: ", label)?;
    stdout.reset()?;
    writeln!(stdout, "{}", message)
}

macro_rules! write_tone {
    ($dest:expr, $tone:ident, $label:expr, $($arg:tt)*) => {
        if let Err(e) = $crate::color::write_line(
            $dest,
            $crate::color::Tone::$tone,
            $label,
            format_args!($($arg)*),
        ) {
            log::error!("Cannot write to console: {}", e);
        }
    };
}

macro_rules! write_error {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_tone!($dest, Error, $label, $($arg)*)
    };
}
macro_rules! write_warn {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_tone!($dest, Warn, $label, $($arg)*)
    };
}
macro_rules! write_info {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_tone!($dest, Info, $label, $($arg)*)
    };
}
macro_rules! write_ok {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_tone!($dest, Ok, $label, $($arg)*)
    };
}
