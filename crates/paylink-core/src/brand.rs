//! # Card Brands
//!
//! The closed set of payment networks Paylink can offer on an invoice's
//! payment page. Caller-supplied values outside the set are dropped
//! before transmission, never rejected.

use serde::{Deserialize, Serialize};

/// Card brands accepted by the Paylink gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardBrand {
    Mada,
    VisaMastercard,
    Amex,
    Tabby,
    Tamara,
    Stcpay,
    Urpay,
}

impl CardBrand {
    /// Every brand the gateway accepts
    pub const ALL: [CardBrand; 7] = [
        CardBrand::Mada,
        CardBrand::VisaMastercard,
        CardBrand::Amex,
        CardBrand::Tabby,
        CardBrand::Tamara,
        CardBrand::Stcpay,
        CardBrand::Urpay,
    ];

    /// The gateway's wire name for this brand
    pub fn as_str(&self) -> &'static str {
        match self {
            CardBrand::Mada => "mada",
            CardBrand::VisaMastercard => "visaMastercard",
            CardBrand::Amex => "amex",
            CardBrand::Tabby => "tabby",
            CardBrand::Tamara => "tamara",
            CardBrand::Stcpay => "stcpay",
            CardBrand::Urpay => "urpay",
        }
    }

    /// Parse a wire name into a brand. Returns `None` for anything
    /// outside the closed set (case-sensitive, matching the gateway).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mada" => Some(CardBrand::Mada),
            "visaMastercard" => Some(CardBrand::VisaMastercard),
            "amex" => Some(CardBrand::Amex),
            "tabby" => Some(CardBrand::Tabby),
            "tamara" => Some(CardBrand::Tamara),
            "stcpay" => Some(CardBrand::Stcpay),
            "urpay" => Some(CardBrand::Urpay),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter caller-supplied brand names down to the closed set.
///
/// Order-preserving; unrecognized values are silently dropped.
pub fn filter_card_brands<I, S>(brands: I) -> Vec<CardBrand>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    brands
        .into_iter()
        .filter_map(|b| CardBrand::parse(b.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for brand in CardBrand::ALL {
            assert_eq!(CardBrand::parse(brand.as_str()), Some(brand));
        }
        assert_eq!(CardBrand::parse("paypal"), None);
        assert_eq!(CardBrand::parse("MADA"), None);
    }

    #[test]
    fn test_filter_drops_unknown_preserves_order() {
        let filtered = filter_card_brands(["tabby", "paypal", "mada", "", "urpay"]);
        assert_eq!(
            filtered,
            vec![CardBrand::Tabby, CardBrand::Mada, CardBrand::Urpay]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_card_brands(["visaMastercard", "bitcoin", "amex"]);
        let twice = filter_card_brands(once.iter().map(CardBrand::as_str));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&CardBrand::VisaMastercard).unwrap();
        assert_eq!(json, "\"visaMastercard\"");
        let json = serde_json::to_string(&CardBrand::Stcpay).unwrap();
        assert_eq!(json, "\"stcpay\"");
    }
}
