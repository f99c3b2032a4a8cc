//! Provider status command handler

use crate::state::SharedState;

pub fn cmd_providers(state: &SharedState) {
    println!("Image Providers (fallback order):");
    println!("{:-<50}", "");

    for (name, enabled) in state.fetcher.provider_status() {
        let status = if enabled {
            "✓ enabled"
        } else {
            "✗ disabled (no credentials)"
        };
        println!("• {name:<10} {status}");
    }

    println!();
    println!("Keys come from config.toml or the UNSPLASH_ACCESS_KEY /");
    println!("PEXELS_API_KEY environment variables.");
}
