//! # Brushquote CLI
//!
//! Interactive terminal demo for the estimate engine. Prompts for one
//! room's dimensions and openings, runs the engine once, and prints the
//! summary plus its JSON form.
//!
//! This is a smoke-test surface, not the product UI.

use std::io::{self, BufRead, Write};

use quote_core::pricing::estimate_room;
use quote_core::project::ProjectDefaults;
use quote_core::quote::QuoteBuilder;
use quote_core::rooms::{CeilingType, Room};
use quote_core::settings::{GeometryConstants, PricingSettings};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_f64(prompt, default as f64) as u32
}

fn main() {
    println!("Brushquote CLI - House Painting Estimator");
    println!("=========================================");
    println!();

    let length_ft = prompt_f64("Room length (ft) [14.0]: ", 14.0);
    let width_ft = prompt_f64("Room width (ft) [12.0]: ", 12.0);
    let height_ft = prompt_f64("Wall height (ft) [9.0]: ", 9.0);
    let peak_ft = prompt_f64("Cathedral peak, 0 for flat (ft) [0.0]: ", 0.0);
    let windows = prompt_u32("Windows [2]: ", 2);
    let doors = prompt_u32("Doors [1]: ", 1);
    let coats = prompt_u32("Wall coats [2]: ", 2);

    let mut room = Room::new("CLI Demo", length_ft, width_ft, height_ft);
    room.window_count = windows;
    room.door_count = doors;
    room.coats_walls = coats;
    if peak_ft > height_ft {
        room.ceiling_type = CeilingType::Cathedral;
        room.cathedral_peak_ft = peak_ft;
    }

    println!();
    println!("Estimating with the shipped default rate table...");
    println!();

    let summary = estimate_room(
        &room,
        &ProjectDefaults::default(),
        &QuoteBuilder::new(),
        &PricingSettings::default(),
        &GeometryConstants::default(),
    );

    println!("=========================================");
    println!("  ROOM ESTIMATE");
    println!("=========================================");
    println!();
    println!("Surfaces:");
    println!("  Walls:     {:>8.1} sqft", summary.wall_area_sqft().value());
    println!("  Ceiling:   {:>8.1} sqft", summary.ceiling_area_sqft().value());
    println!("  Baseboard: {:>8.1} LF", summary.baseboard_lf().value());
    println!();
    println!("Paint:");
    println!("  Wall:    {:>5.1} gal", summary.gallons.walls.value());
    println!("  Ceiling: {:>5.1} gal", summary.gallons.ceilings.value());
    println!("  Trim:    {:>5.1} gal", summary.gallons.trim.value());
    println!("  Door:    {:>5.1} gal", summary.gallons.doors.value());
    println!();
    println!("Totals:");
    println!("  Labor:     ${:>10.2}", summary.labor_total.value());
    println!("  Materials: ${:>10.2}", summary.materials_total.value());
    println!("  Total:     ${:>10.0}", summary.grand_total.value());
    println!("=========================================");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{}", json);
    }
}
