//! Text rendering of the board.
//!
//! Red pieces sit on a red background and Black pieces on green, with the river
//! drawn as a blue band. `--plain` falls back to letters only: uppercase for Red,
//! lowercase for Black.

use crate::config::Config;
use crossterm::style::Stylize;
use engine::{Color, Occupant, Snapshot, Square};
use std::fmt::Write;

const FILES: &str = "a  b  c  d  e  f  g  h  i";

pub fn board(snapshot: &Snapshot, config: &Config) -> String {
    let mut out = String::with_capacity(1024);
    let rows: Vec<u8> = if config.flipped { (0..10).collect() } else { (0..10).rev().collect() };
    let cols: Vec<u8> = if config.flipped { (0..9).rev().collect() } else { (0..9).collect() };
    let files: String = if config.flipped { FILES.chars().rev().collect() } else { FILES.to_string() };

    let _ = writeln!(out, "     {files}");
    for (i, &row) in rows.iter().enumerate() {
        let _ = write!(out, "{:>3} ", row + 1);
        for &col in &cols {
            let cell = Square::new(col, row).and_then(|sq| snapshot.get(sq));
            out.push_str(&paint(cell, config));
        }
        let _ = writeln!(out, " {}", row + 1);
        // The river runs between rows 5 and 6.
        if i == 4 {
            out.push_str(&river(config));
            out.push('\n');
        }
    }
    let _ = writeln!(out, "     {files}");
    out
}

fn paint(cell: Option<Occupant>, config: &Config) -> String {
    let Some(occupant) = cell else {
        return " . ".to_string();
    };
    let text = format!(" {} ", occupant.to_char());
    if !config.color {
        return text;
    }
    match occupant.color {
        Color::Red => text.white().on_red().to_string(),
        Color::Black => text.black().on_green().to_string(),
    }
}

fn river(config: &Config) -> String {
    let band = format!("{:^27}", "~ river ~");
    if config.color {
        format!("    {}", band.on_blue())
    } else {
        format!("    {band}")
    }
}
