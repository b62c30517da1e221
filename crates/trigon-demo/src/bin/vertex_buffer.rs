//! Triangle drawn from an interleaved position+color vertex buffer.

use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::pipeline::TriangleVariant;
use trigon_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon · vertex buffer".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), TriangleVariant::vertex_buffer())?;
    log::info!("window closed");
    Ok(())
}
