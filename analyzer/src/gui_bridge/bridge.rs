use crate::gui_bridge::model::{AnalysisRequest, VisualizationModel};
use crate::workflow::config::parse_bound;
use crate::workflow::runner::Runner;
use anyhow::Result;
use seiscore::signal::{Series, TimeWindow};
use seiscore::telemetry::AnalysisMetrics;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that hosts the renderer HTTP endpoints and re-runs the pipeline on
/// posted parameter changes. The loaded series stays immutable behind an Arc;
/// every request derives a fresh model from it.
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
    metrics: Arc<AnalysisMetrics>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>, series: Arc<Series>) -> Self {
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let metrics = Arc::new(AnalysisMetrics::new());
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());
        let series_filter = warp::any().map(move || series.clone());
        let metrics_for_filter = metrics.clone();
        let metrics_filter = warp::any().map(move || metrics_for_filter.clone());

        let get_route = warp::path("trace")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<VisualizationModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let metrics_route = warp::path("metrics")
            .and(warp::get())
            .and(metrics_filter.clone())
            .map(|metrics: Arc<AnalysisMetrics>| {
                let (analyses, events_flagged, errors) = metrics.snapshot();
                warp::reply::json(&json!({
                    "analyses": analyses,
                    "events_flagged": events_flagged,
                    "errors": errors,
                }))
            });

        let post_route = warp::path("analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and(series_filter)
            .and(metrics_filter)
            .and_then(
                |request: AnalysisRequest,
                 state: Arc<RwLock<VisualizationModel>>,
                 runner: Arc<Runner>,
                 series: Arc<Series>,
                 metrics: Arc<AnalysisMetrics>| async move {
                    let window = match (parse_bound(&request.start), parse_bound(&request.end)) {
                        (Ok(start), Ok(end)) => Ok(TimeWindow::new(start, end)),
                        (Err(err), _) | (_, Err(err)) => Err(err),
                    };
                    match window {
                        Ok(window) => {
                            let result =
                                runner.execute_with(&series, request.threshold, Some(window));
                            metrics.record_analysis(result.detections.len());
                            let model = VisualizationModel::from_result(&result);
                            let detection_count = model.detection_count;
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(
                                    &json!({"status": "ok", "detections": detection_count}),
                                ),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            metrics.record_error();
                            eprintln!("analyze error: {:#}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(post_route).or(metrics_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state, metrics }
    }

    pub fn publish(&self, model: &VisualizationModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] trace points: {}, detections: {}",
            guard.trace.len(),
            guard.detection_count
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    pub fn metrics(&self) -> Arc<AnalysisMetrics> {
        self.metrics.clone()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}
