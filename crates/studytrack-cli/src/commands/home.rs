use clap::Args;
use serde::Serialize;
use studytrack_core::screens::{home_view, GaugeGeometry, HomeView};

use super::print_json;

#[derive(Args)]
pub struct HomeArgs {
    /// Include gauge geometry for a square canvas of this many pixels
    #[arg(long)]
    gauge_size: Option<f64>,
    /// Gauge stroke width in pixels
    #[arg(long, default_value = "10")]
    stroke: f64,
}

#[derive(Serialize)]
struct HomeOutput {
    #[serde(flatten)]
    view: HomeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    gauge_geometry: Option<GaugeGeometry>,
}

pub fn run(args: HomeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let view = home_view();
    let gauge_geometry = args
        .gauge_size
        .map(|size| view.gauge.gauge.geometry(size, size, args.stroke));
    print_json(&HomeOutput {
        view,
        gauge_geometry,
    })
}
