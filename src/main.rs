//! # Vending Machine Demo
//!
//! Stocks a machine, buys a coke with a nickel and a quarter, walks through
//! the failure cases and prints the display.

use tracing::{error, info, warn, Instrument};
use vending_machine::clients::VendingService;
use vending_machine::config::MachineConfig;
use vending_machine::lifecycle::{setup_tracing, VendingSystem};
use vending_machine::model::{Coin, Item, ItemType, MachineId};

/// Shelf layout of the demo: (first code, last code, kind, price).
const STOCK: [(u32, u32, ItemType, u32); 4] = [
    (101, 103, ItemType::Coke, 12),
    (104, 105, ItemType::Pepsi, 9),
    (106, 107, ItemType::Juice, 13),
    (108, 110, ItemType::Soda, 7),
];

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var("VENDING_CONFIG") {
        Ok(path) => MachineConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => MachineConfig::default(),
    };
    info!(?config, "Starting vending machine demo");

    let system = VendingSystem::new(&config, 1).map_err(|e| e.to_string())?;
    let machine = system
        .machine(MachineId(1))
        .ok_or("machine_1 missing")?
        .clone();

    let span = tracing::info_span!("stocking");
    async {
        for (first, last, kind, price) in STOCK {
            let item = Item::new(kind, price).map_err(|e| e.to_string())?;
            for code in first..=last {
                if let Err(e) = machine.load(code, item).await {
                    warn!(code, error = %e, "Shelf not loaded");
                }
            }
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("purchase");
    async {
        let total = machine
            .insert_coins(&[Coin::Nickel, Coin::Quarter])
            .await
            .map_err(|e| e.to_string())?;
        info!(total, "Coins inserted");

        match machine.select_product(102).await {
            Ok(dispense) => info!(
                item = %dispense.item.kind(),
                change = dispense.change,
                "Enjoy your drink"
            ),
            Err(e) => error!(error = %e, "Purchase failed"),
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("failures");
    async {
        for (coins, code) in [
            (vec![Coin::Dime], 106),
            (vec![Coin::Quarter], 999),
        ] {
            if let Err(e) = VendingService::purchase(&machine, coins, code).await {
                warn!(code, error = %e, "Rejected as expected");
            }
        }
        if let Err(e) = machine.select_product(101).await {
            warn!(error = %e, "Rejected as expected");
        }

        machine.insert_coin(Coin::Quarter).await.map_err(|e| e.to_string())?;
        let refund = machine.cancel().await.map_err(|e| e.to_string())?;
        info!(amount = refund.amount, "Refunded");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let shelves = machine.display().await.map_err(|e| e.to_string())?;
    for shelf in &shelves {
        let next = shelf
            .next_item
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:<6} x{:<3}{}",
            shelf.code,
            next,
            shelf.stock_count,
            if shelf.sold_out { "  SOLD OUT" } else { "" }
        );
    }

    drop(machine);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
