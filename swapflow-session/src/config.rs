use swapflow_data::Currency;
use swapflow_step::catalog;
use crate::Error;

pub const ENV_CURRENCIES: &str = "SWAPFLOW_CURRENCIES";
pub const ENV_REFERRAL_CODE: &str = "SWAPFLOW_REFERRAL_CODE";

pub const DEFAULT_REFERRAL_CODE: &str = "mgzySX";

/// Settings for a [`FlowEngine`](crate::FlowEngine)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(default))]
pub struct FlowConfig {
  /// Currency codes the user can pick from
  pub currencies: Vec<String>,
  pub referral_code: String,
  pub estimate_commands: Vec<String>,
  pub trade_commands: Vec<String>,
  /// Photos in a row a step may receive before an unreadable one aborts the dialogue
  pub attempt_limit: usize,
}

impl Default for FlowConfig {
  fn default() -> Self {
    fn owned(src: &[&str]) -> Vec<String> {
      src.iter().map(|s| (*s).to_owned()).collect()
    }

    FlowConfig {
      currencies: owned(catalog::DEFAULT_CURRENCIES),
      referral_code: DEFAULT_REFERRAL_CODE.to_owned(),
      estimate_commands: owned(catalog::ESTIMATE_COMMANDS),
      trade_commands: owned(catalog::TRADE_COMMANDS),
      attempt_limit: 2,
    }
  }
}

impl FlowConfig {
  /// Defaults overridden by `SWAPFLOW_CURRENCIES` (comma separated) and `SWAPFLOW_REFERRAL_CODE`
  pub fn from_env() -> Result<Self, Error> {
    // only the names read here have to be valid unicode
    let vars = [ENV_CURRENCIES, ENV_REFERRAL_CODE]
      .iter()
      .filter_map(|name| std::env::var(name).ok().map(|val| ((*name).to_owned(), val)))
      .collect::<Vec<_>>();
    Self::from_vars(vars)
  }

  pub fn from_vars<I>(vars: I) -> Result<Self, Error>
      where I: IntoIterator<Item = (String, String)>
  {
    let mut config = FlowConfig::default();
    for (name, val) in vars {
      match &name[..] {
        ENV_CURRENCIES => {
          config.currencies = val
            .split(',')
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .map(|code| code.to_uppercase())
            .collect();
        },
        ENV_REFERRAL_CODE => config.referral_code = val.trim().to_owned(),
        _ => (),
      }
    }
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.currencies.len() < 2 {
      return Err(Error::Config("at least two currencies are needed for an exchange".to_owned()));
    }
    if self.estimate_commands.is_empty() || self.trade_commands.is_empty() {
      return Err(Error::Config("every path needs an entry command".to_owned()));
    }
    if self.attempt_limit == 0 {
      return Err(Error::Config("attempt_limit must be at least 1".to_owned()));
    }
    self.parsed_currencies().map(|_| ())
  }

  pub fn parsed_currencies(&self) -> Result<Vec<Currency>, Error> {
    self.currencies
      .iter()
      .map(|code| code.parse::<Currency>().map_err(|e| Error::Config(format!("currency {:?}: {}", code, e))))
      .collect()
  }
}
