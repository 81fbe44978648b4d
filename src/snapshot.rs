use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DailyRate {
    pub currency: String,
    #[serde(rename = "purchaseRate")]
    pub purchase_rate: Decimal,
    #[serde(rename = "saleRate")]
    pub sale_rate: Decimal,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExchangeSnapshot {
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Vec<DailyRate>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn decodes_a_provider_payload() {
        let payload = r#"{
            "date": "01.12.2014",
            "bank": "PB",
            "baseCurrency": 980,
            "baseCurrencyLit": "UAH",
            "exchangeRate": [
                {
                    "baseCurrency": "UAH",
                    "currency": "EUR",
                    "saleRateNB": 23.9,
                    "purchaseRateNB": 23.9,
                    "saleRate": 24.0,
                    "purchaseRate": 23.35
                },
                {
                    "baseCurrency": "UAH",
                    "currency": "USD",
                    "saleRateNB": 19.2,
                    "purchaseRateNB": 19.2,
                    "saleRate": 19.4,
                    "purchaseRate": 19.0
                }
            ]
        }"#;

        let snapshot: ExchangeSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot.exchange_rate.len(), 2);

        let eur = &snapshot.exchange_rate[0];
        assert_eq!(eur.currency, "EUR");
        assert_eq!(eur.purchase_rate, dec!(23.35));
        assert_eq!(eur.sale_rate, dec!(24.0));
    }

    #[test]
    fn rejects_an_entry_without_rates() {
        let payload = r#"{"exchangeRate": [{"currency": "EUR"}]}"#;
        assert!(serde_json::from_str::<ExchangeSnapshot>(payload).is_err());
    }
}
