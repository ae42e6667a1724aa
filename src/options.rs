use crate::error::CreateError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TopKOptions {
    #[validate(range(min = 1, max = 1_048_576))]
    pub k: u32,
}

impl TopKOptions {
    pub fn new(k: u32) -> Self {
        Self { k }
    }

    /// Parses options written as TOML, e.g. `k = 10`.
    pub fn parse(s: &str) -> Result<Self, CreateError> {
        let options = match toml::from_str::<Self>(s) {
            Ok(options) => options,
            Err(e) => {
                log::debug!("failed to parse top-k options: {e}");
                return Err(CreateError::InvalidOptions {
                    reason: e.to_string(),
                });
            }
        };
        options.check()?;
        Ok(options)
    }

    pub(crate) fn check(&self) -> Result<(), CreateError> {
        if let Err(errors) = self.validate() {
            log::debug!("rejected top-k options {:?}: {errors}", self);
            return Err(CreateError::InvalidOptions {
                reason: errors.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_options() {
        assert_eq!(TopKOptions::parse("k = 10").unwrap(), TopKOptions::new(10));
        assert!(matches!(
            TopKOptions::parse("k = 0"),
            Err(CreateError::InvalidOptions { .. })
        ));
        assert!(matches!(
            TopKOptions::parse("k = 10\nlimit = 3"),
            Err(CreateError::InvalidOptions { .. })
        ));
        assert!(matches!(
            TopKOptions::parse(""),
            Err(CreateError::InvalidOptions { .. })
        ));
        assert!(matches!(
            TopKOptions::parse("k = -1"),
            Err(CreateError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn upper_bound() {
        assert!(TopKOptions::new(1_048_576).check().is_ok());
        assert!(TopKOptions::new(1_048_577).check().is_err());
    }
}
