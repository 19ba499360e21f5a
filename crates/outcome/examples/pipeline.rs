//! Pipeline example for outcome
//!
//! Run with `RUST_LOG=outcome=trace cargo run --example pipeline` to see the
//! short-circuit events.

use outcome::prelude::*;
use tracing_subscriber::EnvFilter;

fn double(x: i32) -> i32 {
    x * 2
}

fn half(x: i32) -> i32 {
    x / 2
}

fn format_error(code: String) -> String {
    format!("code: {code}")
}

fn hoge_err(_: i32) -> Outcome<String, String> {
    err("HOGE".to_string())
}

fn even_or_odd(x: i32) -> Outcome<i32, String> {
    if x % 2 == 0 { ok(x) } else { err("ODD".to_string()) }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Symmetric methods: the failure produced by `hoge_err` is still formatted
    let start: Outcome<i32, i32> = ok(42);
    let forced = start
        .apply(ok(double))
        .fmap(double)
        .fmap(half)
        .chain(hoge_err)
        .fmap(format_error);
    tracing::info!(result = %forced, "symmetric pipeline");

    // Free functions: `bind` short-circuits on failure
    let checked = bind(ok(42), even_or_odd);
    tracing::info!(result = %checked, "bind on an even number");

    let skipped = bind(err("upstream".to_string()), even_or_odd);
    tracing::info!(result = %skipped, "bind on a failure");

    let rendered = match_with(checked, Arms {
        ok: |x: i32| ok::<String, String>(x.to_string()),
        err: |e: String| err(format_error(e)),
    });
    tracing::info!(
        result = %rendered,
        truthy = rendered.to_truthy_int(),
        "matched both branches"
    );

    let fallback = default_with(skipped, |e| i32::from(e.is_empty()));
    tracing::info!(fallback, "defaulted from failure payload");
}
