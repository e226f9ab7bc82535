/// Macro to create an integer-backed ID such as the chat id a session is keyed by
#[macro_export]
macro_rules! generate_id_type {
  ($struct_name:ident) => {
    #[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
    pub struct $struct_name(i64);
    impl $struct_name {
      pub fn new(val: i64) -> Self {
        $struct_name(val)
      }
      pub fn val(&self) -> i64 {
        self.0
      }
    }
    impl std::fmt::Display for $struct_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
      }
    }
    impl std::str::FromStr for $struct_name {
      type Err = $crate::IdError<$struct_name>;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val = s.parse::<i64>().map_err(|_e| $crate::IdError::CannotParse(s.to_owned()))?;
        Ok(Self::new(val))
      }
    }
  };
}
