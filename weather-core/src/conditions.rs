//! WMO weather interpretation codes, as reported by Open-Meteo.

use crate::model::ConditionDescriptor;

/// Descriptor for codes missing from [`WMO_CODES`].
pub const UNKNOWN: ConditionDescriptor = ConditionDescriptor {
    symbol: "❔",
    description: "Unknown conditions",
};

const fn entry(
    code: i32,
    symbol: &'static str,
    description: &'static str,
) -> (i32, ConditionDescriptor) {
    (code, ConditionDescriptor { symbol, description })
}

pub const WMO_CODES: &[(i32, ConditionDescriptor)] = &[
    entry(0, "☀️", "Clear sky"),
    entry(1, "🌤️", "Mainly clear"),
    entry(2, "⛅", "Partly cloudy"),
    entry(3, "☁️", "Overcast"),
    entry(45, "🌫️", "Fog"),
    entry(48, "🌫️", "Depositing rime fog"),
    entry(51, "🌦️", "Light drizzle"),
    entry(53, "🌦️", "Moderate drizzle"),
    entry(55, "🌧️", "Dense drizzle"),
    entry(56, "🌧️", "Light freezing drizzle"),
    entry(57, "🌧️", "Dense freezing drizzle"),
    entry(61, "🌦️", "Slight rain"),
    entry(63, "🌧️", "Moderate rain"),
    entry(65, "🌧️", "Heavy rain"),
    entry(66, "🌧️", "Light freezing rain"),
    entry(67, "🌧️", "Heavy freezing rain"),
    entry(71, "🌨️", "Slight snowfall"),
    entry(73, "🌨️", "Moderate snowfall"),
    entry(75, "❄️", "Heavy snowfall"),
    entry(77, "🌨️", "Snow grains"),
    entry(80, "🌦️", "Rain showers (slight)"),
    entry(81, "🌧️", "Rain showers (moderate)"),
    entry(82, "🌧️", "Rain showers (violent)"),
    entry(85, "🌨️", "Snow showers (slight)"),
    entry(86, "🌨️", "Snow showers (heavy)"),
    entry(95, "⛈️", "Thunderstorm (slight/moderate)"),
    entry(96, "⛈️", "Thunderstorm with slight hail"),
    entry(99, "⛈️", "Thunderstorm with heavy hail"),
];

/// Look up the descriptor for `code`, falling back to [`UNKNOWN`].
pub fn describe(code: i32) -> ConditionDescriptor {
    WMO_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(UNKNOWN)
}
