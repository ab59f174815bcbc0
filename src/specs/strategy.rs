// src/specs/strategy.rs
//! Extraction strategies: each one is a pure function from a rendered page to
//! an optional number. A field's cascade is an ordered list of them; the first
//! strategy that yields a plausible value wins.

use regex::Regex;
use scraper::Selector;

use super::PageDoc;
use crate::core::sanitize::number_with_unit;

/// What one scraped field looks like on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    /// Mark that must trail the number (`°`, `%`).
    pub unit: char,
    /// Whether element text may carry a leading minus sign.
    pub signed: bool,
    /// Max digits the page-source scan captures before the unit.
    pub source_digits: usize,
    /// Inclusive bounds a value must fall in to be kept.
    pub plausible: Option<(i32, i32)>,
}

impl Field {
    pub fn accepts(&self, value: i32) -> bool {
        match self.plausible {
            Some((lo, hi)) => (lo..=hi).contains(&value),
            None => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Elements matched by a CSS selector whose whole text is `<number><unit>`.
    Css { field: Field, selector: String },
    /// `<1..n digits><unit>` anywhere in the page source, first plausible hit.
    SourceScan { field: Field },
}

impl Strategy {
    pub fn field(&self) -> &Field {
        match self {
            Strategy::Css { field, .. } | Strategy::SourceScan { field } => field,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Strategy::Css { selector, .. } => format!("css {selector:?}"),
            Strategy::SourceScan { field } => {
                format!("source scan {}", source_pattern(field))
            }
        }
    }

    /// Never fails: an unusable selector or pattern just yields nothing.
    pub fn apply(&self, page: &PageDoc) -> Option<i32> {
        match self {
            Strategy::Css { field, selector } => {
                let sel = match Selector::parse(selector) {
                    Ok(sel) => sel,
                    Err(e) => {
                        logd!("Extract: {} selector {:?} skipped ({:?})", field.name, selector, e);
                        return None;
                    }
                };
                page.dom().select(&sel).find_map(|el| {
                    let text: String = el.text().collect();
                    number_with_unit(&text, field.unit, field.signed)
                        .filter(|v| field.accepts(*v))
                })
            }
            Strategy::SourceScan { field } => {
                let re = match Regex::new(&source_pattern(field)) {
                    Ok(re) => re,
                    Err(e) => {
                        loge!("Extract: {} source pattern invalid: {}", field.name, e);
                        return None;
                    }
                };
                re.captures_iter(page.source())
                    .filter_map(|c| c.get(1)?.as_str().parse::<i32>().ok())
                    .find(|v| field.accepts(*v))
            }
        }
    }
}

fn source_pattern(field: &Field) -> String {
    format!(
        "([0-9]{{1,{}}}){}",
        field.source_digits.max(1),
        regex::escape(&field.unit.to_string())
    )
}

/// Selector guesses in order, then the page-source scan.
pub fn cascade(field: Field, selectors: &[String]) -> Vec<Strategy> {
    selectors
        .iter()
        .map(|s| Strategy::Css { field, selector: s.clone() })
        .chain(std::iter::once(Strategy::SourceScan { field }))
        .collect()
}

pub fn first_match(strategies: &[Strategy], page: &PageDoc) -> Option<i32> {
    for strategy in strategies {
        if let Some(v) = strategy.apply(page) {
            logd!("Extract: {} = {} via {}", strategy.field().name, v, strategy.describe());
            return Some(v);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PCT: Field = Field {
        name: "pct",
        unit: '%',
        signed: false,
        source_digits: 3,
        plausible: Some((0, 100)),
    };

    #[test]
    fn cascade_ends_with_source_scan() {
        let c = cascade(PCT, &[s!(".a"), s!(".b")]);
        assert_eq!(c.len(), 3);
        assert!(matches!(c[0], Strategy::Css { ref selector, .. } if selector == ".a"));
        assert!(matches!(c[2], Strategy::SourceScan { .. }));
    }

    #[test]
    fn first_selector_with_a_hit_wins() {
        let page = PageDoc::parse(r#"<p class="a">n/a</p><p class="b">40%</p><p class="c">55%</p>"#);
        let c = cascade(PCT, &[s!(".a"), s!(".c"), s!(".b")]);
        assert_eq!(first_match(&c, &page), Some(55));
    }

    #[test]
    fn invalid_selector_is_skipped() {
        let page = PageDoc::parse(r#"<p class="b">40%</p>"#);
        let c = cascade(PCT, &[s!("p:contains('%')"), s!("[[["), s!(".b")]);
        assert_eq!(first_match(&c, &page), Some(40));
    }

    #[test]
    fn source_scan_respects_plausibility() {
        let page = PageDoc::parse("<div>chance 250% then 81%</div>");
        assert_eq!(Strategy::SourceScan { field: PCT }.apply(&page), Some(81));
    }
}
