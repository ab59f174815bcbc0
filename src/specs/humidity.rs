// src/specs/humidity.rs
//! Relative humidity, percent. Anything outside `0..=100` is noise
//! (rain probability badges, progress bars) and is skipped on both tiers.

use super::{cascade, first_match, Field, PageDoc};

pub const FIELD: Field = Field {
    name: "humidity",
    unit: '%',
    signed: false,
    source_digits: 3,
    plausible: Some((0, 100)),
};

pub fn extract(page: &PageDoc, selectors: &[String]) -> Option<i32> {
    first_match(&cascade(FIELD, selectors), page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ScrapeOptions;

    fn selectors() -> Vec<String> {
        ScrapeOptions::default().humidity_selectors
    }

    #[test]
    fn class_selector_match() {
        let page = PageDoc::parse(r#"<p class="humidity">70 %</p>"#);
        assert_eq!(extract(&page, &selectors()), Some(70));
    }

    #[test]
    fn portuguese_class_name() {
        let page = PageDoc::parse(r#"<span class="umidade-relativa">64%</span>"#);
        assert_eq!(extract(&page, &selectors()), Some(64));
    }

    #[test]
    fn implausible_values_are_skipped() {
        let page = PageDoc::parse(
            r#"<p class="humidity">150%</p>
               <p>Umidade do ar: 88%</p>"#,
        );
        assert_eq!(extract(&page, &selectors()), Some(88));
    }

    #[test]
    fn source_scan_when_no_selector_hits() {
        let page = PageDoc::parse("<div>Umidade 45% - 90%</div>");
        assert_eq!(extract(&page, &selectors()), Some(45));
    }

    #[test]
    fn nothing_to_find() {
        let page = PageDoc::parse("<div>22°</div>");
        assert_eq!(extract(&page, &selectors()), None);
    }

    #[test]
    fn selector_tier_bounds_are_inclusive() {
        let sel = selectors();
        assert_eq!(extract(&PageDoc::parse(r#"<p class="humidity">0%</p>"#), &sel), Some(0));
        assert_eq!(extract(&PageDoc::parse(r#"<p class="humidity">100%</p>"#), &sel), Some(100));
        assert_eq!(extract(&PageDoc::parse(r#"<p class="humidity">101%</p>"#), &sel), None);
    }

    #[test]
    fn source_scan_bounds_are_inclusive() {
        let sel = selectors();
        assert_eq!(extract(&PageDoc::parse("<div>Umidade 0%</div>"), &sel), Some(0));
        assert_eq!(extract(&PageDoc::parse("<div>Umidade 100%</div>"), &sel), Some(100));
        assert_eq!(extract(&PageDoc::parse("<div>Umidade 101%</div>"), &sel), None);
        assert_eq!(extract(&PageDoc::parse("<div>101% e 100%</div>"), &sel), Some(100));
    }
}
