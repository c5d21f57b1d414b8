//! Product tier model.

use serde::{Deserialize, Serialize};

/// The product tier an assessment was submitted under.
///
/// The tier selects the multiplier-table policy: the free tier always uses
/// the global default range, while the paid tier consults the
/// industry-specific NAICS tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Free tier: global default range, fixed ±20% estimate band.
    Free,
    /// Paid tier: industry-specific range, min/max estimate band.
    Paid,
}

impl Tier {
    /// Returns true for the paid tier.
    pub fn is_paid(&self) -> bool {
        *self == Tier::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&Tier::Free).unwrap(), "\"free\"");
        assert_eq!(serde_json::to_string(&Tier::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_tier_deserialization() {
        let tier: Tier = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(tier, Tier::Free);

        let tier: Tier = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(tier, Tier::Paid);
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let result: Result<Tier, _> = serde_json::from_str("\"premium\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_paid() {
        assert!(Tier::Paid.is_paid());
        assert!(!Tier::Free.is_paid());
    }
}
