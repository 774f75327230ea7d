/// Names (or paths) of the external programs
#[derive(Debug, Clone, PartialEq)]
pub struct Tools {
  /// Repairs mp3 metadata in place, called as `<repair> -f <file>`
  pub repair: String,
  /// Changes the tempo, called as `<filter> -y -i <in> -filter:a atempo=<ratio> -vn <out>`
  pub filter: String,
}
