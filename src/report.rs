//! Text and JSON rendering of query results

use std::fmt::Write;

use railfare_core::{Fare, UNREACHABLE, routing::Route};
use serde_json::json;

use crate::cli::Format;
use crate::error::AppError;

pub fn render_route(route: &Route, format: Format) -> Result<String, AppError> {
    match format {
        Format::Text => Ok(format!("{route}\nTotal fare: {}", route.total_fare())),
        Format::Json => Ok(serde_json::to_string_pretty(&route.to_json())?),
    }
}

pub fn render_fares(from: &str, fares: &[(&str, Fare)], format: Format) -> Result<String, AppError> {
    match format {
        Format::Text => {
            let mut out = format!("Fares from {from}:");
            for (station, fare) in fares {
                if *fare == UNREACHABLE {
                    let _ = write!(out, "\n  {station}: unreachable");
                } else {
                    let _ = write!(out, "\n  {station}: {fare}");
                }
            }
            Ok(out)
        }
        Format::Json => {
            let entries: Vec<_> = fares
                .iter()
                .map(|(station, fare)| {
                    json!({
                        "station": station,
                        "fare": (*fare != UNREACHABLE).then_some(*fare),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json!({
                "departure": from,
                "fares": entries,
            }))?)
        }
    }
}
