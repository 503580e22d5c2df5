/*
[INPUT]:  Backend response schemas
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - response payloads
[UPDATE]: When the backend schema changes or new endpoints are added
*/

use serde::{Deserialize, Serialize};

use super::models::PaymentCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub requires_3ds: Option<bool>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

impl TopUpResponse {
    /// URL the user has to visit to confirm the payment, if any
    pub fn confirmation_url(&self) -> Option<&str> {
        match (self.requires_3ds, self.redirect_url.as_deref()) {
            (Some(true), Some(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddCardResponse {
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Card listing as sent by the backend: bare or paginated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentMethodsResponse {
    List(Vec<PaymentCard>),
    Paged {
        #[serde(default)]
        results: Vec<PaymentCard>,
    },
}

impl PaymentMethodsResponse {
    pub fn into_cards(self) -> Vec<PaymentCard> {
        match self {
            PaymentMethodsResponse::List(cards) => cards,
            PaymentMethodsResponse::Paged { results } => results,
        }
    }
}
