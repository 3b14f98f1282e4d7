use colored::*;

use crate::geometry::Coordinate;
use crate::route::RouteSummary;
use crate::storage::{Feature, RouteNote};

pub struct OutputFormatter;

impl OutputFormatter {
    fn format_location(location: &Coordinate) -> String {
        format!(
            "{:.7}, {:.7}",
            location.latitude_degrees(),
            location.longitude_degrees()
        )
    }

    pub fn format_feature(feature: &Feature) -> String {
        if feature.is_named() {
            format!(
                "Found feature called \"{}\" at {}",
                feature.name.green(),
                Self::format_location(&feature.location).cyan()
            )
        } else {
            format!(
                "{} at {}",
                "Found no feature".yellow(),
                Self::format_location(&feature.location).cyan()
            )
        }
    }

    pub fn format_summary(summary: &RouteSummary) -> String {
        format!(
            "Finished trip with {} points\nPassed {} features\nTravelled {} meters\nIt took {} seconds",
            summary.point_count.to_string().cyan(),
            summary.feature_count.to_string().cyan(),
            summary.distance.to_string().cyan(),
            summary.elapsed_time.to_string().cyan()
        )
    }

    pub fn format_note(note: &RouteNote) -> String {
        format!(
            "Got message \"{}\" at {}",
            note.message.green(),
            Self::format_location(&note.location).cyan()
        )
    }

    pub fn format_header(title: &str) -> String {
        format!("== {} ==", title).blue().bold().to_string()
    }

    pub fn format_error(err: &str) -> String {
        format!("(error) {}", err.red())
    }

    pub fn format_connecting_message(endpoint: &str) -> String {
        format!("Connecting to {}...", endpoint.cyan())
    }

    pub fn format_connected_message(endpoint: &str) -> String {
        format!("Connected to {}", endpoint.green())
    }
}
