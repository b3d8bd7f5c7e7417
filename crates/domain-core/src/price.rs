//! 价格值对象

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 价格值对象
///
/// 金额以最小单位存储（如分），避免二进制浮点的累积误差。
/// 序列化为带两位小数的 JSON 数值（如 `99.99`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    /// 金额（以最小单位存储，如分）
    amount: i64,
}

impl Price {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    pub fn zero() -> Self {
        Self { amount: 0 }
    }

    /// 从十进制金额创建（四舍五入到分）
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            amount: (amount * 100.0).round() as i64,
        }
    }

    /// 转换为十进制金额（用于显示和序列化）
    pub fn to_decimal(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    /// 最小单位金额
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(D::Error::custom("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(D::Error::custom("price must not be negative"));
        }
        Ok(Self::from_decimal(value))
    }
}
