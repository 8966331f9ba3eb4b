//! Load Testing Tool
//!
//! Hammers the point service in-process with concurrent charges and uses
//! spread over many users, then checks every balance against its history.
//!
//! Run with: cargo run --bin load_test --release -- --users 50 --ops 200

use std::sync::Arc;
use std::time::Instant;

use point_ledger::{
    Amount, ErrorKind, InMemoryLedgerStore, PointService, TransactionType, UserId,
};

fn arg_value(args: &[String], flag: &str, default: i64) -> i64 {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Business-rule rejections are expected under contention
fn is_rejection(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound | ErrorKind::InsufficientBalance | ErrorKind::LimitExceeded
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let users = arg_value(&args, "--users", 50).max(1);
    let ops = arg_value(&args, "--ops", 200).max(1);

    println!("Load Test - {} users x {} operations", users, ops);

    let service = PointService::new(Arc::new(InMemoryLedgerStore::new()));
    let one = Amount::new(1)?;

    let start = Instant::now();
    let mut tasks = Vec::with_capacity((users * ops) as usize);

    for user in 1..=users {
        let user_id = UserId::new(user)?;
        for op in 0..ops {
            let service = service.clone();
            tasks.push(tokio::spawn(async move {
                // Two charges for every use keeps most uses satisfiable
                if op % 3 == 2 {
                    service.use_points(user_id, one).await
                } else {
                    service.charge(user_id, one).await
                }
            }));
        }
    }

    let mut success_count = 0u64;
    let mut rejected_count = 0u64;
    for task in tasks {
        match task.await? {
            Ok(_) => success_count += 1,
            Err(e) if is_rejection(e.kind()) => rejected_count += 1,
            Err(e) => return Err(e.into()),
        }
    }

    let elapsed = start.elapsed();
    let rate = success_count as f64 / elapsed.as_secs_f64();

    // Every balance must equal the sum of its history
    let mut mismatches = 0u64;
    for user in 1..=users {
        let user_id = UserId::new(user)?;
        let history = service.get_history(user_id).await?;
        let expected: i64 = history
            .iter()
            .map(|h| match h.transaction_type {
                TransactionType::Charge => h.amount.value(),
                TransactionType::Use => -h.amount.value(),
            })
            .sum();
        let actual = match service.get_balance(user_id).await {
            Ok(point) => point.points.value(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };
        if expected != actual {
            mismatches += 1;
            println!("User {}: balance {} but history sums to {}", user, actual, expected);
        }
    }

    println!("\n=== Load Test Results ===");
    println!("Total operations: {}", users * ops);
    println!("Successful: {}", success_count);
    println!("Rejected: {}", rejected_count);
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Rate: {:.0} ops/sec", rate);
    println!("Balance/history mismatches: {}", mismatches);

    if mismatches > 0 {
        anyhow::bail!("{} users have inconsistent balances", mismatches);
    }
    Ok(())
}
