use super::Photo;

/// A raw inbound reply, kept verbatim so it can be replayed from history.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
  Text(String),
  Photo(Photo),
}

fn is_decoration(c: char) -> bool {
  c.is_whitespace() || (!c.is_ascii() && !c.is_alphanumeric())
}

impl Input {
  pub fn text<STR>(text: STR) -> Self
      where STR: Into<String>
  {
    Input::Text(text.into())
  }

  /// The text as received. For a photo, its caption or an empty string.
  pub fn raw(&self) -> &str {
    match self {
      Input::Text(text) => text,
      Input::Photo(photo) => photo.caption().unwrap_or(""),
    }
  }

  pub fn photo(&self) -> Option<&Photo> {
    match self {
      Input::Photo(photo) => Some(photo),
      Input::Text(_) => None,
    }
  }

  /// The text with leading emoji, whitespace and a single leading `/` stripped.
  ///
  /// ```
  /// # use swapflow_data::Input;
  /// assert_eq!(Input::text("🧮 Estimate").normalized(), "Estimate");
  /// assert_eq!(Input::text("  /trade btc").normalized(), "trade btc");
  /// assert_eq!(Input::text(".5").normalized(), ".5");
  /// ```
  pub fn normalized(&self) -> &str {
    let trimmed = self.raw().trim_start_matches(is_decoration);
    trimmed.strip_prefix('/').unwrap_or(trimmed)
  }

  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.normalized().split_whitespace()
  }

  /// First word of the normalized text, empty if there is none
  pub fn first_word(&self) -> &str {
    self.words().next().unwrap_or("")
  }

  pub fn is_single_word(&self) -> bool {
    self.words().count() == 1
  }
}

impl From<&str> for Input {
  fn from(text: &str) -> Self {
    Input::text(text)
  }
}

impl From<Photo> for Input {
  fn from(photo: Photo) -> Self {
    Input::Photo(photo)
  }
}
