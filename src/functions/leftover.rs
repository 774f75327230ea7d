use std::collections::HashSet;

/// Requested urls that were never downloaded, in the order they were requested, without repeats.
pub fn leftover<'a>(requested: &[String], downloaded: impl IntoIterator<Item = &'a str>) -> Vec<String> {
  let downloaded : HashSet<&str> = downloaded.into_iter().collect();
  let mut reported = HashSet::new();
  requested.iter()
    .filter(|url| !downloaded.contains(url.as_str()) && reported.insert(url.as_str()))
    .cloned()
    .collect()
}

pub fn print_leftover(leftover: &[String]) {
  if leftover.is_empty() {
    return;
  }
  println!("Could not get:");
  for url in leftover {
    println!("{}", url);
  }
}
