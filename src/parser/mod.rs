// HTML extraction for show listing pages

use crate::apis::site::{FieldRule, SiteConfig};
use crate::common::error::{Result, ScraperError};
use crate::common::types::RawShow;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector {
        selector: selector.to_string(),
        message: format!("{e:?}"),
    })
}

struct CompiledField {
    selector: Selector,
    index: usize,
    strip_suffix_chars: usize,
}

impl CompiledField {
    fn new(rule: &FieldRule) -> Result<Self> {
        Ok(Self {
            selector: compile(&rule.selector)?,
            index: rule.index,
            strip_suffix_chars: rule.strip_suffix_chars,
        })
    }

    /// Text of the `index`-th match inside `card`, empty when there is none
    fn extract(&self, card: &ElementRef) -> String {
        card.select(&self.selector)
            .nth(self.index)
            .map(|el| clean_text(&el.text().collect::<String>(), self.strip_suffix_chars))
            .unwrap_or_default()
    }
}

/// Collapse whitespace runs the way rendered text reads, drop `strip_suffix`
/// trailing characters, then trim.
///
/// Trailing whitespace is counted as part of the suffix: markup such as
/// `"6 de agosto | "` loses exactly `" | "` with a suffix of 3.
pub fn clean_text(text: &str, strip_suffix: usize) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.trim_start().chars() {
        if c.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
            }
            in_space = true;
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }

    if strip_suffix > 0 {
        let keep = collapsed.chars().count().saturating_sub(strip_suffix);
        collapsed = collapsed.chars().take(keep).collect();
    }
    collapsed.trim().to_string()
}

/// Extract every show card on a listing page.
///
/// Cards with an empty title are returned as-is; dropping them is up to the caller.
pub fn parse_shows(html: &str, site: &SiteConfig) -> Result<Vec<RawShow>> {
    let base = Url::parse(&site.url).map_err(|e| ScraperError::InvalidUrl {
        url: site.url.clone(),
        message: e.to_string(),
    })?;

    let item_selector = compile(&site.item)?;
    let title = CompiledField::new(&site.title)?;
    let date = CompiledField::new(&site.date)?;
    let time = site.time.as_ref().map(CompiledField::new).transpose()?;
    let image_selector = compile(&site.image)?;

    let document = Html::parse_document(html);
    let cards: Vec<_> = document.select(&item_selector).collect();
    debug!("Found {} cards with selector '{}'", cards.len(), site.item);

    let shows = cards
        .iter()
        .map(|card| {
            let time = time.as_ref().and_then(|field| {
                let text = field.extract(card);
                if text.is_empty() {
                    site.time_placeholder.clone()
                } else {
                    Some(text)
                }
            });

            let image = card
                .select(&image_selector)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::trim)
                .filter(|src| !src.is_empty())
                .and_then(|src| match base.join(src) {
                    Ok(url) => Some(url.to_string()),
                    Err(e) => {
                        warn!("Ignoring unresolvable image src '{}': {}", src, e);
                        None
                    }
                });

            RawShow {
                title: title.extract(card),
                raw_date: date.extract(card),
                time,
                venue: site.venue.clone(),
                image,
            }
        })
        .collect();

    Ok(shows)
}
