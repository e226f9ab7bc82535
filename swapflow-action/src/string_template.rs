use crate::TemplateError;

/// Fill the positional `{}` placeholders of `escaped_template` with `params`, in order.
///
/// Every placeholder needs a parameter and every parameter a placeholder.
pub fn render_template<ES>(escaped_template: &str, params: &[ES]) -> Result<String, TemplateError>
    where ES: AsRef<str>
{
  let mut pieces = escaped_template.split("{}");
  let mut result = String::with_capacity(escaped_template.len());
  if let Some(first) = pieces.next() {
    result.push_str(first);
  }

  let mut used = 0;
  for piece in pieces {
    let param = params.get(used).ok_or(TemplateError::MissingParam(used))?;
    result.push_str(param.as_ref());
    result.push_str(piece);
    used += 1;
  }

  if used < params.len() {
    return Err(TemplateError::UnusedParam(used));
  }
  Ok(result)
}

pub trait EscapedString : AsRef<str> + std::fmt::Debug + Send + Sync + 'static {
  fn from_unescaped(unescaped_str: &str) -> Self;
  fn already_escaped(escaped_str: String) -> Self;
}

/// Text safe to embed in a Telegram-style HTML message
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlEscapedString(String);
impl EscapedString for HtmlEscapedString {
  fn from_unescaped(unescaped_str: &str) -> Self {
    HtmlEscapedString(htmlescape::encode_minimal(unescaped_str))
  }
  fn already_escaped(escaped_str: String) -> Self {
    HtmlEscapedString(escaped_str)
  }
}

impl HtmlEscapedString {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

impl AsRef<str> for HtmlEscapedString {
    fn as_ref(&self) -> &str {
        &(self.0)[..]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UriEscapedString(String);
impl EscapedString for UriEscapedString {
  fn from_unescaped(unescaped_str: &str) -> Self {
    UriEscapedString(urlencoding::encode(unescaped_str))
  }
  fn already_escaped(escaped_str: String) -> Self {
    UriEscapedString(escaped_str)
  }
}
impl AsRef<str> for UriEscapedString {
    fn as_ref(&self) -> &str {
        &(self.0)[..]
    }
}


#[cfg(test)]
mod tests {
  use super::{render_template, EscapedString, HtmlEscapedString, UriEscapedString};
  use crate::TemplateError;

  #[test]
  fn positional() {
    let output = render_template("What {} address do you want to receive {} to?", &["XMR", "XMR"]);
    assert_eq!(output.unwrap(), "What XMR address do you want to receive XMR to?");

    let no_params: &[&str] = &[];
    assert_eq!(render_template("plain", no_params).unwrap(), "plain");
  }

  #[test]
  fn param_count_mismatch() {
    assert_eq!(render_template("{} and {}", &["one"]), Err(TemplateError::MissingParam(1)));
    assert_eq!(render_template("{}", &["one", "two"]), Err(TemplateError::UnusedParam(1)));
  }

  #[test]
  fn escaping() {
    let html = HtmlEscapedString::from_unescaped("<b>&</b>");
    assert_eq!(html.as_ref(), "&lt;b&gt;&amp;&lt;/b&gt;");

    let uri = UriEscapedString::from_unescaped("/hi there?/");
    assert_eq!(uri.as_ref(), "%2Fhi%20there%3F%2F");

    let params = vec![HtmlEscapedString::from_unescaped("a<b")];
    assert_eq!(render_template("<code>{}</code>", &params).unwrap(), "<code>a&lt;b</code>");
  }
}
