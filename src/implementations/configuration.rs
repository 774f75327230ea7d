use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::structures::{Configuration, Error, RatioTable, ToolPolicy, Tools};

/// Name of the configuration file, looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "shorten.cfg";

impl Configuration {
  /// `shorten.cfg` in the directory of the running executable
  pub fn default_location() -> Result<PathBuf, Error> {
    let executable = std::env::current_exe()?;
    let directory = executable.parent().ok_or_else(|| Error::InvalidConfig(format!("{} has no parent directory", executable.display())))?;
    Ok(directory.join(CONFIG_FILE_NAME))
  }

  #[instrument]
  pub async fn load(path: &Path) -> Result<Self, Error> {
    info!("Reading configuration from {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    Self::parse(&text)
  }

  /// Parses the JSON configuration.
  ///
  /// `urlfile`, `ratiodict`, `storage` and `outfolder` are required, `ratiodict` must hold a
  /// numeric `default`. `repair_tool`, `filter_tool`, `check_tool_status` and
  /// `parallel_downloads` are optional. Unknown keys are ignored.
  pub fn parse(text: &str) -> Result<Self, Error> {
    let parsed = json::parse(text)?;
    if !parsed.is_object() {
      return Err(Error::InvalidConfig(format!("expected an object, found: {}", parsed.dump())));
    }

    let defaults = Tools::default();
    let tools = Tools {
      repair: optional_string(&parsed, "repair_tool")?.unwrap_or(defaults.repair),
      filter: optional_string(&parsed, "filter_tool")?.unwrap_or(defaults.filter),
    };
    let tool_policy = match optional_bool(&parsed, "check_tool_status")? {
      Some(true) => ToolPolicy::Check,
      _ => ToolPolicy::Ignore,
    };
    let parallel_downloads = match &parsed["parallel_downloads"] {
      json::JsonValue::Null => 1,
      value => value.as_usize()
        .filter(|amount| *amount > 0)
        .ok_or_else(|| Error::InvalidConfig(format!("\"parallel_downloads\" must be a positive integer, found: {}", value.dump())))?,
    };

    Ok(Self {
      url_file: required_string(&parsed, "urlfile")?.into(),
      ratios: RatioTable::from_json(&parsed["ratiodict"])?,
      storage: required_string(&parsed, "storage")?.into(),
      destination: required_string(&parsed, "outfolder")?.into(),
      tools,
      tool_policy,
      parallel_downloads,
    })
  }
}

fn required_string(parsed: &json::JsonValue, key: &str) -> Result<String, Error> {
  optional_string(parsed, key)?.ok_or_else(|| Error::InvalidConfig(format!("\"{}\" is missing", key)))
}

fn optional_string(parsed: &json::JsonValue, key: &str) -> Result<Option<String>, Error> {
  match &parsed[key] {
    json::JsonValue::Null => Ok(None),
    value => value.as_str()
      .map(|value| Some(value.to_string()))
      .ok_or_else(|| Error::InvalidConfig(format!("\"{}\" must be a string, found: {}", key, value.dump()))),
  }
}

fn optional_bool(parsed: &json::JsonValue, key: &str) -> Result<Option<bool>, Error> {
  match &parsed[key] {
    json::JsonValue::Null => Ok(None),
    value => value.as_bool()
      .map(Some)
      .ok_or_else(|| Error::InvalidConfig(format!("\"{}\" must be true or false, found: {}", key, value.dump()))),
  }
}
