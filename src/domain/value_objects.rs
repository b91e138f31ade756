use serde::{Deserialize, Serialize};

use super::PriceError;

/// 価格 - 書籍の販売価格
///
/// 不変条件：有限かつ0以上
/// 型システムでこの制約を強制し、負の価格やNaNを作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// 価格を作成する
    ///
    /// # エラー
    /// - 負の値の場合は`PriceError::Negative`
    /// - NaN・無限大の場合は`PriceError::NotFinite`
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(value))
    }

    /// 無料（0）
    pub fn free() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::free()
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_new_valid() {
        let price = Price::new(9.99).unwrap();
        assert_eq!(price.value(), 9.99);
    }

    #[test]
    fn test_price_zero_is_valid() {
        let price = Price::new(0.0);
        assert!(price.is_ok());
        assert_eq!(price.unwrap(), Price::free());
    }

    #[test]
    fn test_price_negative_is_rejected() {
        let price = Price::new(-0.01);
        assert_eq!(price.unwrap_err(), PriceError::Negative);
    }

    #[test]
    fn test_price_not_finite_is_rejected() {
        assert_eq!(Price::new(f64::NAN).unwrap_err(), PriceError::NotFinite);
        assert_eq!(
            Price::new(f64::INFINITY).unwrap_err(),
            PriceError::NotFinite
        );
    }

    #[test]
    fn test_price_display_two_decimals() {
        assert_eq!(Price::new(9.5).unwrap().to_string(), "9.50");
    }

    // serde経由でも不変条件が守られること
    #[test]
    fn test_price_deserialize_rejects_negative() {
        let price: Result<Price, _> = serde_json::from_str("-3.0");
        assert!(price.is_err());

        let price: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(price.value(), 12.5);
    }
}
