//! Basic example: issue a token and verify it
//!
//! Run with `RUST_LOG=hstoken=trace` to see the library's tracing events.

use hstoken::*;
use tracing_subscriber::EnvFilter;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hstoken=debug")),
        )
        .init();

    println!("=== hstoken - Basic Example ===\n");

    // In a real application the secret comes from configuration
    let secret = Secret::from("s3cr3t");
    println!("Secret: {:?}\n", secret);

    // Step 1: Sign
    println!("Step 1: Signing a token valid for 24 hours...");
    let claims = Claims::new()
        .with("sub", "alice")
        .with("roles", vec!["reader", "writer"]);
    let token = sign(&claims, now_millis() + DAY_MILLIS, &secret)?;
    println!("  ✓ Token: {}\n", token);

    // Step 2: Inspect the structure without trusting it
    println!("Step 2: Splitting the token...");
    let parsed = ParsedToken::from_string(&token)?;
    println!("  ✓ Header segment:    {}", parsed.header());
    println!("  ✓ Payload segment:   {}", parsed.payload());
    println!("  ✓ Signature segment: {}\n", parsed.signature());

    // Step 3: Verify
    println!("Step 3: Verifying...");
    let verified = verify(&token, &secret)?;
    println!("  ✓ Signature verified");
    println!("  ✓ Not expired\n");

    println!("=== Verified Claims ===");
    println!("{}\n", verified.to_json());

    // Step 4: Failure modes
    println!("Step 4: Rejections...");
    match verify(&token, &Secret::from("wrong")) {
        Err(e) => println!("  ✓ Wrong secret: {}", e),
        Ok(_) => println!("  ✗ Wrong secret accepted"),
    }

    let expired = sign(&claims, now_millis() - 1, &secret)?;
    match verify(&expired, &secret) {
        Err(e) => println!("  ✓ Expired token: {}", e),
        Ok(_) => println!("  ✗ Expired token accepted"),
    }

    match verify("not.a.token", &secret) {
        Err(e) => println!("  ✓ Garbage: {}", e),
        Ok(_) => println!("  ✗ Garbage accepted"),
    }

    Ok(())
}
