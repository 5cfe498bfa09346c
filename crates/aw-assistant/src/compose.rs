//! Reply templates.
//!
//! Intent wins over conditions: a "cold" or "hot" question gets a yes/no
//! answer against a fixed threshold, anything else is described by the
//! current condition.

use aw_protocol::{Sentiment, WeatherSnapshot};

/// At or above this temperature (°C) it is not cold.
pub const COLD_BELOW: f64 = 15.0;

/// Strictly above this temperature (°C) it is hot.
pub const HOT_ABOVE: f64 = 25.0;

const FALLBACK_NEGATIVE: &str = "I sense you’re feeling a bit down 😕. Tell me which city’s weather you’d like to know (for example: “What’s the weather in Toronto?”).";
const FALLBACK_POSITIVE: &str =
    "Love the enthusiasm! 🎉 Which city’s weather should I look up for you?";
const FALLBACK_NEUTRAL: &str =
    "I’m here to help — just ask me about the weather in any city (e.g., “Is it raining in London?”).";

/// Weather categories with their own template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Rain,
    Snow,
    Thunderstorm,
    Clouds,
    Clear,
    Other,
}

impl Condition {
    fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "rain" | "drizzle" => Condition::Rain,
            "snow" => Condition::Snow,
            "thunderstorm" => Condition::Thunderstorm,
            "clouds" => Condition::Clouds,
            "clear" => Condition::Clear,
            _ => Condition::Other,
        }
    }
}

/// Reply used when no city could be extracted from the question.
pub fn fallback_reply(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Negative => FALLBACK_NEGATIVE,
        Sentiment::Positive => FALLBACK_POSITIVE,
        Sentiment::Neutral => FALLBACK_NEUTRAL,
    }
}

/// Reply for a resolved city with current conditions.
pub fn weather_reply(intent: &str, city: &str, weather: &WeatherSnapshot) -> String {
    let intent = intent.to_lowercase();
    // Adding zero turns -0.0 into 0.0 so it never prints as "-0".
    let t = weather.temperature + 0.0;

    if intent.contains("cold") {
        return if t < COLD_BELOW {
            format!("Yes — it’s quite cold in {city} ({t}°C). Bundle up if you head outside!")
        } else {
            format!("No — it’s not really cold in {city} ({t}°C). You’ll be comfortable.")
        };
    }

    if intent.contains("hot") {
        return if t > HOT_ABOVE {
            format!("Yes — it’s hot in {city} ({t}°C). Stay hydrated and wear light clothes!")
        } else {
            format!("No — it’s not especially hot in {city} ({t}°C). It’s quite pleasant.")
        };
    }

    match Condition::parse(&weather.condition) {
        Condition::Rain => {
            format!("It’s raining in {city} ({t}°C) 🌧️ — grab an umbrella and waterproof shoes.")
        }
        Condition::Snow => {
            format!("Snow is falling in {city} ({t}°C) ❄️ — bundle up in a warm coat and boots!")
        }
        Condition::Thunderstorm => {
            format!("There’s a thunderstorm in {city} ({t}°C) ⚡ — stay indoors and stay safe.")
        }
        Condition::Clouds => {
            format!("It’s cloudy in {city} ({t}°C) ☁️ — a light jacket should be fine.")
        }
        Condition::Clear => {
            format!("It’s clear and sunny in {city} ({t}°C) ☀️ — perfect for outdoor plans!")
        }
        Condition::Other => format!(
            "The weather in {city} is {} ({t}°C).",
            weather.description
        ),
    }
}
