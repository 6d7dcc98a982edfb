use cachefusion::policy::{Destination, WritePolicy};
use cachefusion::simulator::LruSimulator;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sim: LruSimulator<String> = LruSimulator::new(5);

    // Write-through: values starting with "m" go to main memory.
    for v in ["alpha", "mem1", "beta", "mem2"] {
        sim.submit(v.to_string(), |v| {
            if v.starts_with('m') {
                Destination::Backing
            } else {
                Destination::Cache
            }
        });
    }
    println!("cache:       {:?}", sim.store().snapshot_cache());
    println!("main memory: {:?}", sim.store().snapshot_backing());

    sim.set_policy(WritePolicy::WriteBack);
    for v in ["alpha", "mem1", "gamma"] {
        let status = sim.submit(v.to_string(), |_| Destination::Cache);
        let message = status.hit_message().or(status.miss_message()).unwrap_or("");
        println!("{v:>6}: {message} ({})", status.latency_label().unwrap_or_default());
    }
    println!("cache:       {:?}", sim.store().snapshot_cache());
    println!("main memory: {:?}", sim.store().snapshot_backing());
}

// Expected output (latency exponents vary by machine):
// cache:       ["alpha", "beta"]
// main memory: ["mem1", "mem2"]
//  alpha: Cache Hit in L1! (Latency: 10^-4 ms)
//   mem1: Cache Miss! Fetching from Main Memory. (Latency from Main Memory: 10^-4 ms)
//  gamma: Cache Miss! Fetching from Main Memory. (Latency from Main Memory: 10^-4 ms)
// cache:       ["beta", "alpha", "mem1", "gamma"]
// main memory: ["mem2"]
//
// Run with RUST_LOG=cachefusion=debug to see store events.
