//! Triangle whose vertices are generated in the shader from the vertex index.

use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::pipeline::TriangleVariant;
use trigon_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon · builtin index".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), TriangleVariant::builtin_index())?;
    log::info!("window closed");
    Ok(())
}
