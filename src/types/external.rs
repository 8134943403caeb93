use serde::{Deserialize, Deserializer, Serialize};

// Shapes returned by the enumeration API. Missing or `null` fields decode to
// their zero value so a sparse upstream body still relays.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iso_currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: Vec<Currency>,
    /// Upstream type unconfirmed; relayed as-is.
    pub total_count: serde_json::Value,
    /// Upstream type unconfirmed; relayed as-is.
    pub status_message: serde_json::Value,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyData {
    #[serde(deserialize_with = "null_as_default")]
    pub payload: CurrencyPayload,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
}
