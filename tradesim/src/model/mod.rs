use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// [`SimulationRequest`](request::SimulationRequest) submitted to the simulation service.
pub mod request;

/// [`SimulationResult`](result::SimulationResult) returned by the simulation service, and the
/// structured error body it may return instead.
pub mod result;

/// [`Side`] of a simulated order - Buy or Sell.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Deserialize,
    Serialize,
    Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    #[serde(alias = "Buy", alias = "BUY")]
    #[display("buy")]
    Buy,
    #[serde(alias = "Sell", alias = "SELL")]
    #[display("sell")]
    Sell,
}

impl Side {
    /// Return the &str representation of this [`Side`] used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Unique identifier for the exchange whose order book the service simulates against.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Deserialize,
    Serialize,
    Display,
)]
pub enum ExchangeId {
    #[default]
    #[serde(rename = "OKX", alias = "okx")]
    #[display("OKX")]
    Okx,
}

impl ExchangeId {
    /// Return the &str representation of this [`ExchangeId`] used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Okx => "OKX",
        }
    }
}

/// Instrument the service can simulate against.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Deserialize,
    Serialize,
    Display,
)]
pub enum Asset {
    #[default]
    #[serde(rename = "BTC-USDT-SWAP")]
    #[display("BTC-USDT-SWAP")]
    BtcUsdtSwap,
    #[serde(rename = "ETH-USDT-SWAP")]
    #[display("ETH-USDT-SWAP")]
    EthUsdtSwap,
    #[serde(rename = "SOL-USDT-SWAP")]
    #[display("SOL-USDT-SWAP")]
    SolUsdtSwap,
}

impl Asset {
    /// Every [`Asset`] the service can simulate against.
    pub const ALL: [Asset; 3] = [Asset::BtcUsdtSwap, Asset::EthUsdtSwap, Asset::SolUsdtSwap];

    /// Return the &str representation of this [`Asset`] used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Asset::BtcUsdtSwap => "BTC-USDT-SWAP",
            Asset::EthUsdtSwap => "ETH-USDT-SWAP",
            Asset::SolUsdtSwap => "SOL-USDT-SWAP",
        }
    }
}

/// Input string did not name a known [`Side`], [`ExchangeId`] or [`Asset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseModelError {
    pub kind: &'static str,
    pub input: String,
}

impl FromStr for Side {
    type Err = ParseModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(ParseModelError {
                kind: "side",
                input: input.to_owned(),
            }),
        }
    }
}

impl FromStr for ExchangeId {
    type Err = ParseModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.eq_ignore_ascii_case(ExchangeId::Okx.as_str()) {
            Ok(ExchangeId::Okx)
        } else {
            Err(ParseModelError {
                kind: "exchange",
                input: input.to_owned(),
            })
        }
    }
}

impl FromStr for Asset {
    type Err = ParseModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Asset::ALL
            .into_iter()
            .find(|asset| asset.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| ParseModelError {
                kind: "asset",
                input: input.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_de_side() {
        struct TestCase {
            input: &'static str,
            expected: Result<Side, serde_json::Error>,
        }

        let cases = vec![
            TestCase {
                // TC0: lowercase buy
                input: r#""buy""#,
                expected: Ok(Side::Buy),
            },
            TestCase {
                // TC1: uppercase sell alias
                input: r#""SELL""#,
                expected: Ok(Side::Sell),
            },
            TestCase {
                // TC2: unknown side
                input: r#""hold""#,
                expected: Err(serde::de::Error::custom("")),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = serde_json::from_str::<Side>(test.input);

            match (actual, test.expected) {
                (Ok(actual), Ok(expected)) => {
                    assert_eq!(actual, expected, "TC{index} failed")
                }
                (Err(_), Err(_)) => {
                    // Test passed
                }
                (actual, expected) => {
                    // Test failed
                    panic!(
                        "TC{index} failed because actual != expected. \nActual: {actual:?}\nExpected: {expected:?}\n"
                    );
                }
            }
        }
    }

    #[test]
    fn test_wire_representations() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), r#""sell""#);
        assert_eq!(serde_json::to_string(&ExchangeId::Okx).unwrap(), r#""OKX""#);
        assert_eq!(
            serde_json::to_string(&Asset::EthUsdtSwap).unwrap(),
            r#""ETH-USDT-SWAP""#
        );

        for asset in Asset::ALL {
            assert_eq!(asset.to_string(), asset.as_str());
            assert_eq!(asset.as_str().parse::<Asset>(), Ok(asset));
        }
        assert_eq!(ExchangeId::Okx.to_string(), "OKX");
        assert_eq!(Side::Buy.to_string(), Side::Buy.as_str());
        assert_eq!(Side::Sell.to_string(), "sell");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Buy".parse::<Side>(), Ok(Side::Buy));
        assert_eq!("okx".parse::<ExchangeId>(), Ok(ExchangeId::Okx));
        assert_eq!("btc-usdt-swap".parse::<Asset>(), Ok(Asset::BtcUsdtSwap));
        assert_eq!(
            "DOGE-USDT-SWAP".parse::<Asset>(),
            Err(ParseModelError {
                kind: "asset",
                input: "DOGE-USDT-SWAP".to_string()
            })
        );
    }
}
