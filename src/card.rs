//! Card type tags.
//!
//! A [`CardType`] is never stored on its own. It is always derived from the
//! raw card number with [`classify`](crate::detect::classify) and drives the
//! choice of input mask and CVV length.

use std::fmt;

/// Issuer networks recognised by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Visa - prefix 4
    Visa,
    /// American Express - prefix 34 or 37
    Amex,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// Discover - prefix 6011
    Discover,
    /// Anything else, including empty and ambiguous input.
    #[default]
    Unknown,
}

impl CardType {
    /// All card types, in classification order.
    pub const ALL: [CardType; 5] = [
        Self::Visa,
        Self::Amex,
        Self::Mastercard,
        Self::Discover,
        Self::Unknown,
    ];

    /// Returns a human-readable name for the card type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Amex => "American Express",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the lower-case tag used to pick the issuer logo.
    #[inline]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Amex => "amex",
            Self::Mastercard => "mastercard",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }

    /// Maximum number of CVV digits accepted for this card type.
    ///
    /// American Express prints a 4 digit CID on the front; everything else
    /// uses a 3 digit code.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Returns true for every type except [`CardType::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvv_length() {
        assert_eq!(CardType::Amex.cvv_length(), 4);
        assert_eq!(CardType::Visa.cvv_length(), 3);
        assert_eq!(CardType::Mastercard.cvv_length(), 3);
        assert_eq!(CardType::Discover.cvv_length(), 3);
        assert_eq!(CardType::Unknown.cvv_length(), 3);
    }

    #[test]
    fn test_slug_and_display() {
        assert_eq!(CardType::Amex.slug(), "amex");
        assert_eq!(CardType::Amex.to_string(), "American Express");
        assert_eq!(CardType::default(), CardType::Unknown);
        assert!(!CardType::Unknown.is_known());
        assert!(CardType::Discover.is_known());
    }
}
