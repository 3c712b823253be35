use serde::Deserialize;

const DEFAULT_CURRENCY: &str = "usd";
const DEFAULT_DESCRIPTION: &str = "Thrive premium membership";

/// Largest accepted `amount`. Anything above this would overflow the
/// times-100 minor-unit conversion in `unit_amount()`.
const MAX_AMOUNT_MAJOR: i64 = i64::MAX / 100;

/// Raw POST /api/payments body. Fields are optional so validation can
/// answer with the payment route's own 400 shape instead of a serde
/// rejection; the wire uses camelCase to match the web client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionRequest {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

/// A checkout request that passed boundary validation.
///
/// `amount_major` is whole major currency units (dollars, not cents).
/// Conversion to the provider's minor units happens exactly once, in
/// `unit_amount()`; callers sending minor units would be over-charged and
/// are rejected by the documented contract rather than guessed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOrder {
    pub amount_major: i64,
    pub currency: String,
    pub description: String,
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutOrder {
    /// Provider minor units: major units times 100. `validate()` caps
    /// `amount_major` so this cannot overflow.
    pub fn unit_amount(&self) -> i64 {
        self.amount_major * 100
    }
}

impl CheckoutSessionRequest {
    /// Presence, positivity, and bounds checks; the Err string is the
    /// user-facing message relayed verbatim in the 400 response.
    pub fn validate(self) -> Result<CheckoutOrder, String> {
        let amount = match self.amount {
            Some(a) if a > MAX_AMOUNT_MAJOR => {
                return Err("Amount exceeds the maximum supported value".to_string())
            }
            Some(a) if a > 0 => a,
            Some(_) => return Err("Amount must be a positive whole-currency integer".to_string()),
            None => return Err("Amount is required".to_string()),
        };

        let success_url = require_url(self.success_url, "successUrl")?;
        let cancel_url = require_url(self.cancel_url, "cancelUrl")?;

        let currency = self
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        Ok(CheckoutOrder {
            amount_major: amount,
            currency,
            description,
            success_url,
            cancel_url,
        })
    }
}

fn require_url(value: Option<String>, field: &str) -> Result<String, String> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => Ok(v),
        None => Err(format!("{field} is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CheckoutSessionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let req = request(json!({
            "amount": 25,
            "successUrl": "https://x/success",
            "cancelUrl": "https://x/cancel"
        }));
        assert_eq!(req.amount, Some(25));
        assert_eq!(req.success_url.as_deref(), Some("https://x/success"));
        assert_eq!(req.cancel_url.as_deref(), Some("https://x/cancel"));
    }

    #[test]
    fn test_validate_applies_defaults() {
        let order = request(json!({
            "amount": 25,
            "successUrl": "https://x/success",
            "cancelUrl": "https://x/cancel"
        }))
        .validate()
        .unwrap();

        assert_eq!(order.currency, "usd");
        assert_eq!(order.description, DEFAULT_DESCRIPTION);
        assert_eq!(order.unit_amount(), 2500);
    }

    #[test]
    fn test_validate_rejects_zero_and_negative_amounts() {
        let zero = request(json!({
            "amount": 0,
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }));
        assert!(zero.validate().is_err());

        let negative = request(json!({
            "amount": -5,
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }));
        assert!(negative.validate().is_err());

        let missing = request(json!({
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }));
        assert_eq!(missing.validate().unwrap_err(), "Amount is required");
    }

    #[test]
    fn test_validate_rejects_amounts_that_overflow_minor_units() {
        let too_large = request(json!({
            "amount": MAX_AMOUNT_MAJOR + 1,
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }));
        assert_eq!(
            too_large.validate().unwrap_err(),
            "Amount exceeds the maximum supported value"
        );

        let at_cap = request(json!({
            "amount": MAX_AMOUNT_MAJOR,
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }));
        let order = at_cap.validate().unwrap();
        assert_eq!(order.unit_amount(), MAX_AMOUNT_MAJOR * 100);
    }

    #[test]
    fn test_validate_requires_both_redirect_urls() {
        let no_success = request(json!({"amount": 10, "cancelUrl": "https://x/c"}));
        assert_eq!(no_success.validate().unwrap_err(), "successUrl is required");

        let blank_cancel = request(json!({
            "amount": 10,
            "successUrl": "https://x/s",
            "cancelUrl": "  "
        }));
        assert_eq!(blank_cancel.validate().unwrap_err(), "cancelUrl is required");
    }

    #[test]
    fn test_validate_normalizes_currency_case() {
        let order = request(json!({
            "amount": 10,
            "currency": " EUR ",
            "successUrl": "https://x/s",
            "cancelUrl": "https://x/c"
        }))
        .validate()
        .unwrap();
        assert_eq!(order.currency, "eur");
    }
}
