// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example chains asynchronous lookups over a pending outcome.
//!
//! Run with `--features logs` to see the events emitted when a panic is intercepted.

use std::time::Duration;

use outcome::prelude::*;
use outcome::Panic;

#[derive(Debug)]
struct User {
    id: u32,
    name: String,
}

async fn fetch_user(id: u32) -> Outcome<User, String> {
    tokio::time::sleep(Duration::from_millis(10)).await;

    match id {
        0 => Outcome::failure("user 0 does not exist".to_string()),
        _ => Outcome::success(User {
            id,
            name: format!("user-{id}"),
        }),
    }
}

async fn fetch_score(user: &User) -> u32 {
    tokio::time::sleep(Duration::from_millis(5)).await;
    assert!(user.id != 13, "score service crashed for {}", user.name);
    user.id * 10
}

fn describe(panic: Panic) -> String {
    format!("score lookup failed: {panic}")
}

async fn report(id: u32) -> String {
    fetch_user(id)
        .on_success_async(async |user| println!("loaded {}", user.name))
        .map_try_async(
            async |user| {
                let score = fetch_score(&user).await;
                (user, score)
            },
            describe,
        )
        .on_error_async(async |e| eprintln!("{e}"))
        .fold_async(
            async |(user, score)| format!("{} scored {score}", user.name),
            async |e| format!("no report: {e}"),
        )
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().init();

    for id in [7, 0, 13] {
        println!("{}", report(id).await);
    }
}
