// src/specs/temperature.rs
//! Current temperature, degrees Celsius. Element text like `22°` or `-3°`;
//! the page-source fallback takes the first `<1-2 digits>°` it sees.

use super::{cascade, first_match, Field, PageDoc};

pub const FIELD: Field = Field {
    name: "temperature",
    unit: '°',
    signed: true,
    source_digits: 2,
    plausible: None,
};

pub fn extract(page: &PageDoc, selectors: &[String]) -> Option<i32> {
    first_match(&cascade(FIELD, selectors), page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ScrapeOptions;

    fn selectors() -> Vec<String> {
        ScrapeOptions::default().temperature_selectors
    }

    #[test]
    fn selector_match_strips_degree_mark() {
        let page = PageDoc::parse(r#"<span class="temperature-now">22°</span>"#);
        assert_eq!(extract(&page, &selectors()), Some(22));
    }

    #[test]
    fn labels_are_skipped_within_a_selector() {
        let page = PageDoc::parse(
            r#"<span class="temp-label">Temperatura</span>
               <span class="temp-value"> -2 ° </span>"#,
        );
        assert_eq!(extract(&page, &selectors()), Some(-2));
    }

    #[test]
    fn later_selector_used_when_earlier_ones_miss() {
        let page = PageDoc::parse(
            r#"<div data-testid="current-temperature">13°</div>
               <p class="temp-max">29°</p>"#,
        );
        assert_eq!(extract(&page, &selectors()), Some(13));
    }

    #[test]
    fn falls_back_to_first_degree_in_source() {
        let page = PageDoc::parse("<div>Máx 27°C</div><div>Mín 14°C</div>");
        assert_eq!(extract(&page, &selectors()), Some(27));
    }

    #[test]
    fn nothing_to_find() {
        let page = PageDoc::parse("<div>Página indisponível</div>");
        assert_eq!(extract(&page, &selectors()), None);
    }
}
