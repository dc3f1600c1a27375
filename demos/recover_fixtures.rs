use share_consensus::{reconstruct, ShareContainer};

/// Recovers the secret from the two bundled datasets and prints the outcome.
fn main() {
    let fixtures = [
        ("small", include_str!("data/small.json")),
        ("mixed_base", include_str!("data/mixed_base.json")),
    ];
    for (name, json) in fixtures {
        println!("Dataset {name}:");
        let container = match ShareContainer::from_json(json) {
            Ok(container) => container,
            Err(err) => {
                eprintln!("  failed to parse: {err}");
                continue;
            }
        };
        match reconstruct(&container) {
            Ok(result) => {
                println!("  Secret: {}", result.secret);
                println!("  Wrong points: {:?}", result.wrong_shares);
            }
            Err(err) => eprintln!("  reconstruction failed: {err}"),
        }
    }
}
