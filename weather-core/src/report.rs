//! Display content for a lookup: the panel title and its rows.
//!
//! Styling is left to the caller; this module only decides what is shown and
//! in which order.

use crate::{
    conditions::describe,
    flag::flag_for,
    model::{ConditionDescriptor, CurrentConditions, Place, UnitSystem},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    /// Rendered highlighted by terminal front ends.
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub descriptor: ConditionDescriptor,
    pub header: String,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn build(place: &Place, conditions: &CurrentConditions, units: UnitSystem) -> Self {
        let descriptor = describe(conditions.code);
        let header = format!(
            "{} — {}  {}",
            place_label(place),
            descriptor.symbol,
            descriptor.description
        );

        let mut rows = Vec::with_capacity(3);

        if let Some(temperature) = conditions.temperature {
            rows.push(Row {
                label: "Temperature",
                value: format!("{}{}", format_reading(temperature), units.temperature_suffix()),
                emphasis: true,
            });
        }

        if let Some(wind) = conditions.wind_speed {
            rows.push(Row {
                label: "Wind",
                value: format!("{} {}", format_reading(wind), units.wind_suffix()),
                emphasis: false,
            });
        }

        rows.push(Row {
            label: "Coordinates",
            value: format!("{:.3}, {:.3}", place.latitude, place.longitude),
            emphasis: false,
        });

        Self {
            descriptor,
            header,
            rows,
        }
    }

    pub fn row(&self, label: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.label == label)
    }
}

/// `name[, region][, flag]`.
pub fn place_label(place: &Place) -> String {
    let mut bits = vec![place.name.clone()];

    if let Some(region) = place.region.as_deref().filter(|r| !r.trim().is_empty()) {
        bits.push(region.to_string());
    }

    let flag = flag_for(place.country_code.as_deref());
    if !flag.is_empty() {
        bits.push(flag);
    }

    bits.join(", ")
}

/// Shortest representation of a reading that keeps at least one decimal,
/// so `12.0` stays `12.0` rather than `12`.
pub fn format_reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
