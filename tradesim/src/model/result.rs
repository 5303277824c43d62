use serde::{Deserialize, Serialize};

/// Result of one simulated market order, deserialised verbatim from the service response.
///
/// Fractional fields (eg/ `slippage`, `market_impact`, `volatility`) are ratios, not
/// percentages. `maker_prob` and `taker_prob` are independent service estimates in `[0, 1]`;
/// they are expected to sum to ~1 but the client never checks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationResult {
    /// Echo of the requested side, kept as the service reported it.
    pub order_type: String,
    pub filled_quantity: f64,
    pub avg_price: f64,
    pub slippage: f64,
    /// Regression estimated slippage.
    pub reg_slippage: f64,
    pub mid_price: f64,
    pub fees: Fees,
    pub market_impact: f64,
    pub net_cost: f64,
    pub volatility: f64,
    /// Service reported processing latency.
    pub processing_time_ms: u64,
    pub optimal_schedule: f64,
    pub maker_prob: f64,
    pub taker_prob: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fees {
    pub fee_rate: f64,
    pub fee_amount: f64,
    /// Fee tier label selected by the service from the trailing 30 day volume.
    pub fee_tier: String,
    pub order_value: f64,
}

/// Structured error body, returned by the service either with a non-success status code or
/// embedded in a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimulationApiError {
    pub error: String,
}

/// Banner returned by the service root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceStatus {
    pub message: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    mod de {
        use super::*;

        #[test]
        fn test_simulation_result() {
            let actual = serde_json::from_str::<SimulationResult>(test_utils::RESULT_BODY).unwrap();
            assert_eq!(actual, test_utils::simulation_result());
        }

        #[test]
        fn test_simulation_result_ignores_unknown_fields() {
            let mut body = serde_json::from_str::<serde_json::Value>(test_utils::RESULT_BODY)
                .unwrap();
            body["latency_breakdown"] = serde_json::json!({ "orderbook_ms": 3 });

            let actual = serde_json::from_value::<SimulationResult>(body).unwrap();
            assert_eq!(actual, test_utils::simulation_result());
        }

        #[test]
        fn test_simulation_result_missing_field() {
            let actual = serde_json::from_str::<SimulationResult>(
                r#"{"order_type": "buy", "filled_quantity": 1, "avg_price": 1, "slippage": 0}"#,
            );
            assert!(actual.is_err());
        }

        #[test]
        fn test_simulation_api_error() {
            let actual =
                serde_json::from_str::<SimulationApiError>(r#"{"error": "Order book is empty"}"#)
                    .unwrap();
            assert_eq!(actual.error, "Order book is empty");

            assert!(serde_json::from_str::<SimulationApiError>(test_utils::RESULT_BODY).is_err());
        }
    }
}
