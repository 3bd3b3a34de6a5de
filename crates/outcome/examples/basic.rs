// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example validates configuration values with synchronous outcome combinators.

use outcome::prelude::*;

#[derive(Debug)]
struct Listener {
    host: String,
    port: u16,
}

fn parse_port(text: &str) -> Outcome<u16, String> {
    text.parse::<u16>().map_err(|e| format!("invalid port {text:?}: {e}")).into()
}

fn check_privileged(port: u16) -> Outcome<u16, String> {
    if port < 1024 {
        format!("port {port} requires elevated privileges").fail()
    } else {
        port.succeed()
    }
}

fn listener(host: &str, port: &str) -> Outcome<Listener, String> {
    parse_port(port)
        .bind(check_privileged)
        .map(|port| Listener {
            host: host.to_string(),
            port,
        })
        .on_success(|l| println!("configured {}:{}", l.host, l.port))
        .on_error(|e| eprintln!("rejected: {e}"))
}

fn main() {
    for port in ["8080", "80", "http"] {
        let summary = listener("localhost", port).fold(|l| format!("{l:?}"), |e| format!("error: {e}"));
        println!("{port:>6} -> {summary}");
    }

    // Fall back to a default port when the value is malformed.
    let port = parse_port("not-a-port").map_error(|_| 8443).expect();
    println!("fallback port: {port}");

    // A panic inside the guarded stage becomes a typed failure.
    let ports = [8080_u16, 9090];
    let index = std::hint::black_box(5);
    let picked = Outcome::<u16, String>::try_of(|| ports[index], |panic| format!("no port at {index}: {panic}"));
    println!("picked: {picked:?}");
}
