use tracing::warn;

use crate::structures::{Error, RatioTable};

/// Key of the fallback ratio inside `ratiodict`
pub const DEFAULT_KEY: &str = "default";

impl RatioTable {
  pub fn new(entries: Vec<(String, f64)>, default: f64) -> Self {
    Self {
      entries,
      default
    }
  }

  /// Reads a `ratiodict` object, keeping the order in which the keys were written.
  pub(crate) fn from_json(value: &json::JsonValue) -> Result<Self, Error> {
    if !value.is_object() {
      return Err(Error::InvalidConfig(format!("\"ratiodict\" must be an object, found: {}", value.dump())));
    }
    let default = value[DEFAULT_KEY].as_f64().ok_or_else(|| Error::InvalidConfig(format!("\"ratiodict\" needs a numeric \"{}\" entry", DEFAULT_KEY)))?;

    let mut entries = Vec::with_capacity(value.len());
    for (key, ratio) in value.entries() {
      if key == DEFAULT_KEY {
        continue;
      }
      let ratio = ratio.as_f64().ok_or_else(|| Error::InvalidConfig(format!("ratio of \"{}\" is not a number: {}", key, ratio.dump())))?;
      entries.push((key.to_string(), ratio));
    }
    Ok(Self::new(entries, default))
  }

  pub fn entries(&self) -> &[(String, f64)] {
    &self.entries
  }

  pub fn default_ratio(&self) -> f64 {
    self.default
  }

  /// Ratio of the first key that occurs in `url`, without falling back.
  pub fn find(&self, url: &str) -> Option<f64> {
    self.entries.iter()
      .find(|(key, _)| url.contains(key.as_str()))
      .map(|(_, ratio)| *ratio)
  }

  /// Ratio for `url`, the default one if no key matches.
  ///
  /// A matching key configured with a ratio of `0` counts as no match at all, the url gets the
  /// default ratio and later keys are not looked at.
  pub fn resolve(&self, url: &str) -> f64 {
    match self.find(url) {
      Some(ratio) if ratio != 0.0 => ratio,
      _ => {
        warn!("Could not find saved ratio for {}. Using default instead.", url);
        self.default
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table() -> RatioTable {
    RatioTable::new(vec![
      ("radio".to_string(), 1.5),
      ("radio1".to_string(), 1.8),
      ("podcast".to_string(), 1.25),
    ], 1.0)
  }

  #[test]
  fn matching_key_decides_ratio() {
    assert_eq!(table().resolve("https://example.org/podcast/episode-12.mp3"), 1.25);
  }

  #[test]
  fn unmatched_url_gets_default() {
    assert_eq!(table().resolve("https://example.org/news/today.mp3"), 1.0);
    assert_eq!(table().find("https://example.org/news/today.mp3"), None);
  }

  #[test]
  fn first_declared_key_wins() {
    // "radio1" is longer, but "radio" was declared first
    assert_eq!(table().resolve("https://example.org/radio1/show.mp3"), 1.5);
    let reversed = RatioTable::new(vec![
      ("radio1".to_string(), 1.8),
      ("radio".to_string(), 1.5),
    ], 1.0);
    assert_eq!(reversed.resolve("https://example.org/radio1/show.mp3"), 1.8);
  }

  #[test]
  fn zero_ratio_falls_back_to_default() {
    let table = RatioTable::new(vec![
      ("muted".to_string(), 0.0),
      ("show".to_string(), 1.5),
    ], 1.1);
    assert_eq!(table.find("https://example.org/muted/show.mp3"), Some(0.0));
    // matching stops at "muted", "show" is never consulted
    assert_eq!(table.resolve("https://example.org/muted/show.mp3"), 1.1);
  }

  #[test]
  fn json_keeps_declaration_order_and_skips_default() {
    let parsed = json::parse(r#"{"zeta": 2, "default": 1.0, "alpha": 1.5}"#).unwrap();
    let table = RatioTable::from_json(&parsed).unwrap();
    assert_eq!(table.entries(), &[("zeta".to_string(), 2.0), ("alpha".to_string(), 1.5)]);
    assert_eq!(table.default_ratio(), 1.0);
  }

  #[test]
  fn json_without_default_is_rejected() {
    let parsed = json::parse(r#"{"radio": 1.5}"#).unwrap();
    assert!(matches!(RatioTable::from_json(&parsed), Err(Error::InvalidConfig(_))));
  }

  #[test]
  fn json_with_text_ratio_is_rejected() {
    let parsed = json::parse(r#"{"radio": "fast", "default": 1.0}"#).unwrap();
    assert!(matches!(RatioTable::from_json(&parsed), Err(Error::InvalidConfig(_))));
  }
}
