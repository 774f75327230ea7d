/// Ordered substring → ratio table with a fallback.
///
/// Entries are consulted in the order they were declared in the configuration file,
/// the first key that is contained in a url decides its ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioTable {
  pub(crate) entries: Vec<(String, f64)>,
  pub(crate) default: f64,
}
