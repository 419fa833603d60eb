use std::fmt;

/// Condition code used when the forecast service did not report one.
/// No WMO code is negative, so it always falls through to the unknown descriptor.
pub const MISSING_CONDITION_CODE: i32 = -1;

/// First geocoding candidate for a place name.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country_code: Option<String>,
    pub region: Option<String>,
}

/// Current weather at a coordinate, in the units it was requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub code: i32,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temperature: None,
            wind_speed: None,
            code: MISSING_CONDITION_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// `temperature_unit` query value understood by the forecast service.
    pub fn temperature_param(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "celsius",
            UnitSystem::Imperial => "fahrenheit",
        }
    }

    /// `windspeed_unit` query value understood by the forecast service.
    pub fn wind_param(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kmh",
            UnitSystem::Imperial => "mph",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbol and short English phrase for a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDescriptor {
    pub symbol: &'static str,
    pub description: &'static str,
}
