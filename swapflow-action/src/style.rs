//! HTML markup helpers for messages. Arguments are inserted as-is, escape user data first.

pub fn b(s: &str) -> String {
  format!("<b>{}</b>", s)
}

pub fn i(s: &str) -> String {
  format!("<i>{}</i>", s)
}

pub fn code(s: &str) -> String {
  format!("<code>{}</code>", s)
}

/// Escape `s` and wrap it in `<code>`
pub fn code_escaped(s: &str) -> String {
  code(&htmlescape::encode_minimal(s))
}

#[cfg(test)]
mod tests {
  use super::{b, code, code_escaped};

  #[test]
  fn markup() {
    assert_eq!(b("ESTIMATE"), "<b>ESTIMATE</b>");
    assert_eq!(code("1 BTC"), "<code>1 BTC</code>");
    assert_eq!(code_escaped("a&b"), "<code>a&amp;b</code>");
  }
}
