/*
[INPUT]:  Stored credential, amounts and card identifiers
[OUTPUT]: Top-up results and normalized card listings
[POS]:    Domain layer - payment endpoints (require bearer auth)
[UPDATE]: When adding new payment endpoints
*/

use rust_decimal::Decimal;

use crate::api::KettikApi;
use crate::http::{RequestDescriptor, ResponseBody, Result};
use crate::types::{AddCardResponse, PaymentCard, PaymentMethodsResponse, TopUpRequest, TopUpResponse};

impl KettikApi {
    /// POST /payments/topup/
    #[tracing::instrument(skip(self))]
    pub async fn top_up(&self, amount: Decimal, payment_method_id: Option<i64>) -> Result<TopUpResponse> {
        let descriptor = RequestDescriptor::post("/payments/topup/").json(&TopUpRequest {
            amount,
            payment_method_id,
        })?;
        self.guard().execute_authenticated(&descriptor).await?.parse()
    }

    /// List cards, whichever shape the backend answers with
    ///
    /// GET /payments/methods/
    #[tracing::instrument(skip_all)]
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentCard>> {
        let descriptor = RequestDescriptor::get("/payments/methods/");
        let listing: PaymentMethodsResponse =
            self.guard().execute_authenticated(&descriptor).await?.parse()?;
        Ok(listing.into_cards())
    }

    /// Start card enrollment; the returned URL hosts the bank form
    ///
    /// POST /payments/methods/add_card/
    #[tracing::instrument(skip_all)]
    pub async fn add_card(&self) -> Result<AddCardResponse> {
        let descriptor = RequestDescriptor::post("/payments/methods/add_card/");
        self.guard()
            .execute_authenticated(&descriptor)
            .await?
            .parse_or_default()
    }

    /// POST /payments/methods/{id}/set_default/
    #[tracing::instrument(skip(self))]
    pub async fn set_default_card(&self, card_id: i64) -> Result<ResponseBody> {
        let descriptor = RequestDescriptor::post(format!("/payments/methods/{card_id}/set_default/"));
        Ok(self.guard().execute_authenticated(&descriptor).await?.body)
    }

    /// POST /payments/methods/{id}/deactivate/
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_card(&self, card_id: i64) -> Result<ResponseBody> {
        let descriptor = RequestDescriptor::post(format!("/payments/methods/{card_id}/deactivate/"));
        Ok(self.guard().execute_authenticated(&descriptor).await?.body)
    }
}
