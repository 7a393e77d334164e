//! User-facing console messages.
//!
//! `info:` and `ok:` lines and the plain "from -> to" report go to stdout.
//! `warn:` and `error:` go to stderr. Prefixes are coloured only when the
//! stream they are written to is a terminal.

use owo_colors::{AnsiColors, OwoColorize};

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

fn emit(stream: Stream, label: &str, color: AnsiColors, msg: &str) {
    let tty = match stream {
        Stream::Out => atty::is(atty::Stream::Stdout),
        Stream::Err => atty::is(atty::Stream::Stderr),
    };
    let prefix = if tty {
        label.color(color).bold().to_string()
    } else {
        label.to_string()
    };
    match stream {
        Stream::Out => println!("{prefix} {msg}"),
        Stream::Err => eprintln!("{prefix} {msg}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Out, "info:", AnsiColors::Cyan, msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Err, "warn:", AnsiColors::Yellow, msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Err, "error:", AnsiColors::Red, msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Out, "ok:", AnsiColors::Green, msg);
}

/// Unprefixed line on stdout, meant for scripts ("from -> to").
pub fn print_user(msg: &str) {
    println!("{msg}");
}
