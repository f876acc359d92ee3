//! Checkout Flow Example against the in-memory ledger
//!
//! Demonstrates a full terminal session:
//! 1. Seed a small catalog
//! 2. Reserve units by building a cart
//! 3. Adjust a line and review the totals
//! 4. Settle the sale and print the receipt
//!
//! Run: cargo run -p pos-terminal --example checkout_flow

use pos_terminal::{MemoryStore, PosSession, money};
use shared::models::Product;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\n🛒 POS Checkout Flow");
    println!("=====================\n");

    // 1. Seed a small catalog
    let store = MemoryStore::new();
    store.seed_product(catalog_item(1, "ESP-001", "Espresso", 3.50, 20));
    store.seed_product(catalog_item(2, "CRS-002", "Croissant", 2.75, 8));
    store.seed_product(catalog_item(3, "JUC-003", "Orange Juice", 4.25, 12));

    let mut session = PosSession::new(store.clone());
    let settings = session.settings().clone();

    // 2. Build the cart; every add moves one unit out of the ledger
    session.add_to_cart(1).await?;
    session.add_to_cart(1).await?;
    session.add_to_cart(2).await?;
    println!("Added 2x Espresso, 1x Croissant");
    print_stock(&store, &[1, 2, 3]);

    // 3. Bump the croissant line to 3
    session.update_line_quantity(1, 3).await?;
    println!("\nCroissant line raised to 3");
    print_stock(&store, &[1, 2, 3]);

    let totals = session.totals();
    println!("\nSubtotal: {}", money::format_currency(totals.subtotal, &settings));
    println!(
        "Tax ({}%): {}",
        settings.tax_rate,
        money::format_currency(totals.tax, &settings)
    );
    println!("Total:    {}", money::format_currency(totals.total, &settings));

    // 4. Settle with cash
    session.set_customer("Dana");
    let receipt = session.checkout(20.0, "Cash").await?;

    println!("\n🧾 Receipt {}", receipt.order.order_id);
    println!("   Customer: {}", receipt.order.customer);
    println!("   Items:    {}", receipt.order.items);
    println!(
        "   Total:    {}",
        money::format_currency(receipt.totals.total, &settings)
    );
    println!(
        "   Change:   {}",
        money::format_currency(receipt.totals.change, &settings)
    );

    println!("\nLedger after settlement:");
    print_stock(&store, &[1, 2, 3]);
    println!("Recorded orders: {}", store.order_count());

    Ok(())
}

fn catalog_item(id: i64, code: &str, name: &str, price: f64, stock: i32) -> Product {
    Product {
        id,
        code: code.to_string(),
        name: name.to_string(),
        category: "Cafe".to_string(),
        price,
        cost: price / 2.0,
        stock,
        image: String::new(),
        desc: None,
        status: "Active".to_string(),
    }
}

fn print_stock(store: &MemoryStore, ids: &[i64]) {
    for &id in ids {
        if let Some(stock) = store.stock(id) {
            println!("   product {}: {} in stock", id, stock);
        }
    }
}
