//! # Seed Data Generator
//!
//! Populates the three store files with sample data for development.
//!
//! ## Usage
//! ```bash
//! # Write stock.txt, user_accounts.txt, activity_log.txt into ./data
//! cargo run -p cas-db --bin seed
//!
//! # Generate a custom amount of stock
//! cargo run -p cas-db --bin seed -- --count 200
//!
//! # Specify the output directory
//! cargo run -p cas-db --bin seed -- --dir ./shop-data
//! ```
//!
//! ## Generated Data
//! - Stock: alternating keyboards and mice across the known brands,
//!   colours, and device types, with deterministic prices and quantities
//! - Accounts: one admin plus a handful of customers
//! - Activity log: created empty
//!
//! Running against a directory that already has a stock file is a no-op,
//! so an existing data set is never clobbered.

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use cas_core::product::{Connectivity, KeyboardLayout, KeyboardType, MouseType};
use cas_core::{Money, Product, User};
use cas_db::codec;
use cas_db::Database;

const BRANDS: &[&str] = &["Logitech", "Razer", "Corsair", "Dell", "HP", "Microsoft"];

const COLOURS: &[&str] = &["black", "white", "grey", "red", "blue"];

const KEYBOARD_TYPES: &[KeyboardType] = &[
    KeyboardType::Standard,
    KeyboardType::Internet,
    KeyboardType::Gaming,
    KeyboardType::Flexible,
];

const LAYOUTS: &[KeyboardLayout] = &[KeyboardLayout::Uk, KeyboardLayout::Us, KeyboardLayout::Eu];

const MOUSE_TYPES: &[MouseType] = &[MouseType::Standard, MouseType::Gaming, MouseType::Ergonomic];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("CAS-POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --dir <PATH>   Output directory (default: ./data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let dir = Path::new(&dir);
    let stock_path = dir.join("stock.txt");
    let accounts_path = dir.join("user_accounts.txt");
    let log_path = dir.join("activity_log.txt");

    println!("🌱 CAS-POS Seed Data Generator");
    println!("==============================");
    println!("Directory: {}", dir.display());
    println!("Products:  {}", count);
    println!();

    if stock_path.exists() {
        println!("⚠ {} already exists", stock_path.display());
        println!("  Skipping seed to avoid clobbering data.");
        println!("  Delete the file to regenerate.");
        return Ok(());
    }

    fs::create_dir_all(dir)?;

    // Stock file
    let mut writer = BufWriter::new(File::create(&stock_path)?);
    for index in 0..count {
        let product = generate_product(index)?;
        writeln!(writer, "{}", codec::format_product_line(&product))?;
    }
    writer.flush()?;
    println!("✓ Wrote {} products to {}", count, stock_path.display());

    // Accounts file
    let users = sample_users()?;
    let mut writer = BufWriter::new(File::create(&accounts_path)?);
    for user in &users {
        writeln!(writer, "{}", codec::format_user_line(user))?;
    }
    writer.flush()?;
    println!("✓ Wrote {} accounts to {}", users.len(), accounts_path.display());

    // Empty activity log
    File::create(&log_path)?;
    println!("✓ Created empty {}", log_path.display());

    // Verify the files read back cleanly
    println!();
    println!("Verifying...");
    let db = Database::open(&stock_path, &accounts_path, &log_path)?;
    let inventory = db.products()?;
    println!("  Read back {} products, {} accounts", inventory.len(), db.users().len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one deterministic product. Even indices are keyboards, odd
/// ones are mice.
fn generate_product(index: usize) -> Result<Product, Box<dyn std::error::Error>> {
    let barcode = 100_001 + index as u32;
    let brand = BRANDS[index % BRANDS.len()];
    let colour = COLOURS[index % COLOURS.len()];
    let connectivity = if index % 3 == 0 {
        Connectivity::Wireless
    } else {
        Connectivity::Wired
    };

    // Retail price 9.99 - 89.99, original cost roughly two thirds of it.
    let retail_pence = 999 + ((index * 537) % 8000) as i64;
    let retail = Money::from_pence(retail_pence);
    let original = Money::from_pence(retail_pence * 2 / 3);
    let quantity = (index * 7 % 25) as i64;

    let product = if index % 2 == 0 {
        Product::keyboard(
            barcode,
            brand,
            colour,
            connectivity,
            KEYBOARD_TYPES[index % KEYBOARD_TYPES.len()],
            LAYOUTS[index % LAYOUTS.len()],
            original,
            retail,
            quantity,
        )?
    } else {
        Product::mouse(
            barcode,
            brand,
            colour,
            connectivity,
            MOUSE_TYPES[index % MOUSE_TYPES.len()],
            3 + (index % 5) as u32,
            original,
            retail,
            quantity,
        )?
    };

    Ok(product)
}

fn sample_users() -> Result<Vec<User>, Box<dyn std::error::Error>> {
    Ok(vec![
        User::admin(101, "boss", "Adams", 4, "Newcastle", "NE1 6QG")?,
        User::customer(250, "jsmith", "Smith", 12, "Leeds", "LS1 4PQ")?,
        User::customer(251, "epatel", "Patel", 7, "Manchester", "M1 2AB")?,
        User::customer(310, "kwong", "Wong", 221, "London", "SW1A 1AA")?,
        User::customer(472, "omcar", "Carter", 9, "York", "YO1 7HH")?,
    ])
}
