//! Home dashboard.
//!
//! All figures are placeholders; the dashboard has no data source yet.
//! The semicircular gauge is described geometrically so any renderer can
//! draw it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoCard {
    pub title: String,
    pub data: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCard {
    pub title: String,
    pub subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Half-circle gauge opening downward, filled left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemiCircularGauge {
    progress: f64,
}

/// Where to draw the arc and the pointer inside a `width` x `height` box.
/// Angles are in degrees, clockwise from the positive x axis (screen space,
/// y grows downward), so 180 points left and 270 points straight up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub center: Point,
    pub radius: f64,
    pub arc_start_deg: f64,
    pub arc_sweep_deg: f64,
    pub pointer_angle_deg: f64,
    pub pointer_end: Point,
}

impl SemiCircularGauge {
    /// `progress` is clamped into 0.0 ..= 1.0; NaN reads as empty.
    pub fn new(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self { progress }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn pointer_angle_deg(&self) -> f64 {
        180.0 + 180.0 * self.progress
    }

    pub fn geometry(&self, width: f64, height: f64, stroke_width: f64) -> GaugeGeometry {
        let radius = (width.min(height) / 2.0 - stroke_width / 2.0).max(0.0);
        let center = Point {
            x: width / 2.0,
            y: height - stroke_width / 2.0,
        };
        let angle = self.pointer_angle_deg();
        let pointer_length = radius * 0.8;
        let radians = angle.to_radians();
        GaugeGeometry {
            center,
            radius,
            arc_start_deg: 180.0,
            arc_sweep_deg: 180.0,
            pointer_angle_deg: angle,
            pointer_end: Point {
                x: center.x + pointer_length * radians.cos(),
                y: center.y + pointer_length * radians.sin(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeCard {
    pub headline: String,
    pub subline: String,
    pub gauge: SemiCircularGauge,
    pub hours_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub title: String,
    pub cards: Vec<BentoCard>,
    pub gauge: GaugeCard,
    pub modules_title: String,
    pub modules: Vec<ModuleCard>,
}

fn card(title: &str, data: &str, unit: &str) -> BentoCard {
    BentoCard {
        title: title.into(),
        data: data.into(),
        unit: unit.into(),
    }
}

pub fn home_view() -> HomeView {
    HomeView {
        title: "Study Progress".into(),
        cards: vec![
            card("Today’s Tasks", "5", "tasks"),
            card("Assignments", "3", "remaining"),
            card("Study Sessions", "2", "hours today"),
            card("Overall Progress", "75%", "complete"),
        ],
        gauge: GaugeCard {
            headline: "Doing a good job,".into(),
            subline: "Keep it up".into(),
            gauge: SemiCircularGauge::new(0.7),
            hours_label: "14 hours".into(),
        },
        modules_title: "Modules".into(),
        modules: vec![
            ModuleCard {
                title: "Photosynthesis".into(),
                subject: "Science".into(),
            },
            ModuleCard {
                title: "Waste Management".into(),
                subject: "Science".into(),
            },
        ],
    }
}
