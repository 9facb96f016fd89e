pub mod scene;

pub use scene::{load_scene, Scene};

use crate::config::{load_config, ReportConfig};
use crate::core::{CacheLabels, CacheSet, CacheStats, GeometryVariant, MemoryCache};
use crate::report::{ConsoleSink, RenderStatistic};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "renderstat",
    version,
    about = "Summarise a computed geometry result",
    long_about = "Reports shape metrics, cache occupancy, elapsed time and camera framing \
                  for a computed geometry, either as log lines or as a JSON document."
)]
pub struct Cli {
    /// Scene file (JSON) with the computed geometry and camera, `-` for stdin
    #[arg(value_name = "SCENE")]
    pub scene: String,

    /// Statistic category to include (repeatable): geometry, bounding_box,
    /// area, camera, cache, time or all
    #[arg(long = "summary", value_name = "CATEGORY")]
    pub summary: Vec<String>,

    /// Write a JSON summary to this file instead of logging (`-` for stdout)
    #[arg(long = "summary-file", value_name = "FILE")]
    pub summary_file: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RENDERSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ReportConfig::default(),
    };

    let geometry_cache: MemoryCache<String, GeometryVariant> =
        MemoryCache::new(CacheLabels::geometry(), config.cache.geometry_cache_mb);
    #[cfg(feature = "nef")]
    let nef_store: MemoryCache<String, GeometryVariant> =
        MemoryCache::new(CacheLabels::nef(), config.cache.nef_cache_mb);
    #[cfg(feature = "nef")]
    let nef_cache: Option<&dyn CacheStats> = Some(&nef_store);
    #[cfg(not(feature = "nef"))]
    let nef_cache: Option<&dyn CacheStats> = None;

    let sink = ConsoleSink;
    let mut stats = RenderStatistic::new(CacheSet::new(Some(&geometry_cache), nef_cache), &sink);
    stats.start();

    let scene = load_scene(&cli.scene)?;
    if let Some(geometry) = &scene.geometry {
        let cost = serde_json::to_vec(geometry)?.len() as u64;
        #[cfg(feature = "nef")]
        if matches!(geometry, GeometryVariant::NefSolid3D(_)) {
            nef_store.insert(cli.scene.clone(), geometry.clone(), cost);
        }
        geometry_cache.insert(cli.scene.clone(), geometry.clone(), cost);
    }

    let categories = if cli.summary.is_empty() {
        config.summary.categories
    } else {
        cli.summary
    };
    let destination = cli.summary_file.or(config.summary.destination);
    tracing::debug!(?categories, ?destination, "printing render statistics");

    stats.print_all(scene.geometry.as_ref(), &scene.camera, &categories, destination.as_deref())?;
    Ok(())
}
