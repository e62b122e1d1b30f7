//! # Seed Data Generator
//!
//! Populates a store with sample products and walks the collaborator
//! call surface (add, select, update, delete, rejected submission).
//! Useful for eyeballing log output and snapshot shapes during
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the built-in fixtures (default)
//! cargo run -p catalog-store --bin seed
//!
//! # Generate a custom amount (fixtures cycle with numbered names)
//! cargo run -p catalog-store --bin seed -- --count 50
//!
//! # Verbose store logs
//! RUST_LOG=debug cargo run -p catalog-store --bin seed
//! ```

use std::env;
use std::process;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use catalog_core::{validation, Money, ProductType};
use catalog_store::ProductStore;

/// Fixture rows as the form would submit them: raw text for price and
/// quantity, so every row passes through the canonical validation gate.
const FIXTURES: &[(&str, ProductType, &str, &str)] = &[
    ("Classic Tee", ProductType::TShirt, "19.99", "25"),
    ("V-Neck Tee", ProductType::TShirt, "21.50", "18"),
    ("Pocket Tee", ProductType::TShirt, "24.00", "12"),
    ("Long Sleeve Tee", ProductType::TShirt, "27.90", "9"),
    ("Baseball Cap", ProductType::Cap, "14.99", "40"),
    ("Trucker Cap", ProductType::Cap, "16.50", "22"),
    ("Snapback Cap", ProductType::Cap, "18.00", "15"),
    ("Crewneck Sweatshirt", ProductType::Sweatshirt, "39.99", "10"),
    ("Zip Hoodie", ProductType::Sweatshirt, "49.90", "8"),
    ("Pullover Hoodie", ProductType::Sweatshirt, "44.50", "11"),
];

fn main() {
    init_tracing();

    let count = parse_count_arg();
    info!(count, "seeding product store");

    let store = ProductStore::new();

    for i in 0..count {
        let (name, product_type, price, quantity) = FIXTURES[i % FIXTURES.len()];
        // Past the first cycle, number the names so rows stay tellable apart
        let name = if i < FIXTURES.len() {
            name.to_string()
        } else {
            format!("{name} #{}", i / FIXTURES.len() + 1)
        };

        match validation::parse_draft(&name, product_type, price, quantity) {
            Ok(draft) => {
                store.add(draft);
            }
            Err(err) => warn!(%name, error = %err, "fixture rejected by validation"),
        }
    }

    // Edit flow: select the first product, bump its stock, clear selection
    if let Some(first) = store.list().first().cloned() {
        store.set_current(Some(first.clone()));

        let mut edited = first;
        edited.quantity += 10;
        info!(id = edited.id, quantity = edited.quantity, "editing first product");
        store.update(edited);

        store.set_current(None);
    }

    // Delete flow: drop the last product
    if let Some(last) = store.list().last().cloned() {
        info!(id = last.id, name = %last.name, "deleting last product");
        store.delete(&last);
    }

    // A submission the form would keep disabled
    if let Err(err) = validation::parse_draft("ab", ProductType::Cap, "abc", "-1") {
        info!(error = %err, "sample rejected submission");
    }

    print_snapshot(&store);
}

/// Prints the final snapshot the way a list screen would render it.
fn print_snapshot(store: &ProductStore) {
    let snapshot = store.list();
    println!("\n{} products in store:", snapshot.len());

    let mut total = Money::zero();
    for product in &snapshot {
        println!(
            "  #{:<4} {:<28} {:<12} {:>8}  x{}",
            product.id,
            product.name,
            product.product_type.label(),
            product.price.to_string(),
            product.quantity
        );
        total += product.stock_value();
    }
    println!("total stock value: {total}");
}

/// Reads `--count N` from the command line (defaults to one fixture
/// cycle).
fn parse_count_arg() -> usize {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--count" {
            match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => return n,
                None => {
                    eprintln!("usage: seed [--count N]");
                    process::exit(2);
                }
            }
        }
    }
    FIXTURES.len()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show store mutations
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
