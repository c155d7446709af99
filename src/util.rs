//! Small utility helpers used across modules.

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge response payloads. Cuts on a char boundary.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

/// Indent every line of a block, used for stdout/stderr and feedback bodies.
pub fn indent(block: &str, prefix: &str) -> String {
  block
    .lines()
    .map(|l| format!("{}{}", prefix, l))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncation_respects_multibyte_chars() {
    let s = "課題".repeat(10);
    let out = trunc_for_log(&s, 4);
    assert!(out.starts_with("課"));
    assert!(out.ends_with("(60 bytes total)"));
  }

  #[test]
  fn indent_prefixes_each_line() {
    assert_eq!(indent("a\nb", "  "), "  a\n  b");
  }
}
