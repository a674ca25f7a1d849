use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use skytaxi::config::Config;
use skytaxi::engine::Engine;
use skytaxi::error::Error;
use skytaxi::simulation::Executor;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        if err.is_internal() {
            tracing::error!("{}", err);
        } else {
            tracing::warn!("{}", err);
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    // offset the seed so passengers do not mirror the engine's ETA draws
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let engine = Arc::new(Engine::new(config.clone())?);
    let region = engine.region().clone();

    tracing::info!("serving {} at ₹{}/km", region.name, config.base_rate);

    let executor = Executor::new(engine, region, rng, config.cancel_probability);
    executor.run(config.sessions).await?;

    Ok(())
}
