// src/reading.rs
//! One captured forecast row: when, how hot, how humid, where.

use chrono::{Local, NaiveDateTime};

use crate::config::consts::{COLUMNS, TIMESTAMP_FORMAT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherReading {
    timestamp: String,
    temperature: String,
    humidity: String,
    city: String,
}

impl WeatherReading {
    pub fn new(
        at: NaiveDateTime,
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: format_timestamp(at),
            temperature: temperature.into(),
            humidity: humidity.into(),
            city: city.into(),
        }
    }

    /// Stamp with the local wall clock.
    pub fn now(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self::new(Local::now().naive_local(), temperature, humidity, city)
    }

    /// Rebuild from a spreadsheet row in column order. Short rows are rejected.
    pub fn from_row(row: &[String]) -> Option<Self> {
        match row {
            [timestamp, temperature, humidity, city, ..] => Some(Self {
                timestamp: timestamp.clone(),
                temperature: temperature.clone(),
                humidity: humidity.clone(),
                city: city.clone(),
            }),
            _ => None,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.temperature.clone(),
            self.humidity.clone(),
            self.city.clone(),
        ]
    }

    pub fn headers() -> Vec<String> {
        COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    pub fn timestamp(&self) -> &str { &self.timestamp }
    pub fn temperature(&self) -> &str { &self.temperature }
    pub fn humidity(&self) -> &str { &self.humidity }
    pub fn city(&self) -> &str { &self.city }

    /// Parsed timestamp; `None` for rows written by hand in another format.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 14)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn timestamp_uses_day_first_format() {
        let r = WeatherReading::new(at(), "18", "72", "Embu das Artes");
        assert_eq!(r.timestamp(), "14/07/2025 09:05:03");
        assert_eq!(r.recorded_at(), Some(at()));
    }

    #[test]
    fn row_order_is_fixed() {
        let r = WeatherReading::new(at(), "18", "72", "Embu das Artes");
        assert_eq!(
            r.to_row(),
            vec!["14/07/2025 09:05:03", "18", "72", "Embu das Artes"]
        );
        assert_eq!(WeatherReading::from_row(&r.to_row()), Some(r));
    }

    #[test]
    fn short_rows_are_rejected() {
        let row = vec![s!("14/07/2025 09:05:03"), s!("18")];
        assert!(WeatherReading::from_row(&row).is_none());
    }
}
