//! Comparison driver: generates random orientation problem instances and reports running
//! averages of the peak out-degree under Kowalik's strategy and the interval solver.

use std::time::{SystemTime, UNIX_EPOCH};

use dynamic_orientation::generator::{EndpointSampler, Generator};
use dynamic_orientation::intervals::convert_instance;
use dynamic_orientation::solver::solve_instance;
use dynamic_orientation::strategies::orient_by_kowalik;

/// Number of nodes in the graph.
const NODES: usize = 40;
/// Upper bound for arboricity.
const ALPHA: usize = 1;
/// Expected fraction of possible edges.
const EDGE_DENSITY: f64 = 0.8;
/// Purge probability (see the generator).
const PURGE_PROB: f64 = 0.0;
/// Number of Insert/Delete operations per instance.
const INSTANCE_LEN: usize = 1000;
/// Total number of generated instances.
const ATTEMPTS_TARGET: usize = 100;
/// Print statistics after every this many attempts.
const STATS_CHECKPOINT: usize = 10;

fn millis_since_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before the epoch")
        .as_millis() as u64
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("constant logspec parses")
        .start()
        .expect("logger started");

    println!("Launched testing:");
    println!("|V| = {NODES}, arboricity <= {ALPHA}, instance length = {INSTANCE_LEN}\n");

    let seed = millis_since_epoch();
    log::info!("generator seed = {seed}");
    let mut gen = Generator::from_seed(
        NODES,
        ALPHA,
        EDGE_DENSITY,
        PURGE_PROB,
        EndpointSampler::Uniform,
        seed,
    );

    let mut total_kowalik = 0.0;
    let mut total_amc = 0.0;
    for attempt in 1..=ATTEMPTS_TARGET {
        let opi = gen.generate_instance(INSTANCE_LEN);
        let mut ipi = convert_instance(&opi);

        total_kowalik += orient_by_kowalik(&opi) as f64;
        total_amc += solve_instance(&mut ipi) as f64;

        if attempt % STATS_CHECKPOINT == 0 {
            println!("{attempt} / {ATTEMPTS_TARGET} attempts done.");
            println!("Avg. Kowalik outdeg: {:.6}", total_kowalik / attempt as f64);
            println!("Avg. AMC outdeg: {:.6}\n", total_amc / attempt as f64);
        }
    }
}
