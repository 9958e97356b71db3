//! Render a sample banner in every built-in font
//!
//! Run with: cargo run --example font_gallery

use asciigen_core::{all_fonts, generate, list_colors};

fn main() {
    let fonts = all_fonts();
    println!("═══════════════════════════════════════════════════════════");
    println!("  asciigen font gallery - {} fonts available", fonts.len());
    println!("═══════════════════════════════════════════════════════════\n");

    for font in fonts {
        let output = font.render("ASCIIGEN");
        let lines = output.lines().count();
        println!("{} (height: {}, actual lines: {})", font.name, font.height(), lines);
        println!("{output}\n");
    }

    println!("--- Decorated ---\n");

    for (font, color, border) in [("simple", "bright_green", '#'), ("block", "cyan", '+')] {
        match generate("HELLO", font, Some(color), Some(border)) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("  Error: {e}"),
        }
    }

    println!("Colors: {}", list_colors().join(", "));
}
