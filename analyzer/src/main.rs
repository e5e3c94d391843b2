use anyhow::Context;
use clap::Parser;
use generator::profile::build_demo_series;
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use log::info;
use seiscore::ingest::{SeriesLoader, TablePreview};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::AnalysisConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Seismic velocity event-analysis driver")]
struct Args {
    /// CSV file with the time_abs/velocity columns; synthetic data when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Load analysis parameters from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Detection threshold in m/s; defaults to 10% of the maximum amplitude
    #[arg(long)]
    threshold: Option<f64>,
    /// Window start, formatted YYYY-MM-DDTHH:MM:SS.ffffff
    #[arg(long)]
    start: Option<String>,
    /// Window end, same format as --start
    #[arg(long)]
    end: Option<String>,
    /// Print a preview of the first loaded rows
    #[arg(long, default_value_t = false)]
    preview: bool,
    /// Run a single offline analysis and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Keep the GUI bridge alive for incoming parameter changes
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let analysis_config = if let Some(path) = args.workflow {
        AnalysisConfig::load(path)?
    } else {
        AnalysisConfig::from_args(args.threshold, args.start, args.end)
    };

    let series = if let Some(path) = args.input.as_ref() {
        SeriesLoader::new()
            .load_path(path)
            .with_context(|| format!("loading series from {}", path.display()))?
    } else {
        build_demo_series(2048)?
    };
    info!("series ready with {} samples", series.len());
    let series = Arc::new(series);

    if args.preview {
        println!(
            "{}",
            TablePreview::from_series(&series, analysis_config.preview_rows)
        );
    }

    let runner = Runner::new(analysis_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()), series.clone());

    if args.offline {
        let result = runner.execute(&series)?;
        gui_bridge.metrics().record_analysis(result.detections.len());

        println!(
            "Offline run -> events {}, trace points {}, threshold {:.3e}",
            result.detections.len(),
            result.trace.len(),
            result.threshold
        );
        if let Some((min, max)) = result.amplitude_bounds {
            println!("Amplitude range: min {:.3e}, max {:.3e}", min, max);
        }
        for note in &result.notes {
            println!("Note: {}", note);
        }

        let model = VisualizationModel::from_result(&result);
        gui_bridge.publish(&model)?;
        gui_bridge.publish_status("Offline analysis results ready.");

        let report = format!(
            "events={} trace_points={} threshold={:.6e} notes={:?}\n",
            result.detections.len(),
            result.trace.len(),
            result.threshold,
            result.notes
        );
        let report_path = PathBuf::from("tools/data/offline_analysis.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
