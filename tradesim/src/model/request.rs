use super::{Asset, ExchangeId, Side};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Order parameters submitted to the simulation service.
///
/// Serialises to the flat query string
/// `quantity_usd={}&order_type={}&volume_30d={}&exchange={}&asset={}`.
///
/// Values are passed through uninterpreted, the service is the authority on validation (eg/ a
/// negative `quantity_usd` is sent as is).
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct SimulationRequest {
    /// Order size in quote currency.
    pub quantity_usd: f64,

    /// Order side, serialised as `order_type`.
    #[serde(rename = "order_type")]
    pub side: Side,

    /// Trailing 30 day traded volume, used by the service for fee tier lookup.
    pub volume_30d: f64,

    pub exchange: ExchangeId,

    pub asset: Asset,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            quantity_usd: 100.0,
            side: Side::Buy,
            volume_30d: 0.0,
            exchange: ExchangeId::Okx,
            asset: Asset::BtcUsdtSwap,
        }
    }
}
