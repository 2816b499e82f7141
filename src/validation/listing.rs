//! Listing-creation schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;
use super::FieldError;

/// Property categories accepted by the platform, matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
    Villa,
    Land,
    Commercial,
    Industrial,
}

impl PropertyType {
    const VARIANTS: [(&'static str, Self); 8] = [
        ("APARTMENT", Self::Apartment),
        ("HOUSE", Self::House),
        ("CONDO", Self::Condo),
        ("TOWNHOUSE", Self::Townhouse),
        ("VILLA", Self::Villa),
        ("LAND", Self::Land),
        ("COMMERCIAL", Self::Commercial),
        ("INDUSTRIAL", Self::Industrial),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::House => "HOUSE",
            Self::Condo => "CONDO",
            Self::Townhouse => "TOWNHOUSE",
            Self::Villa => "VILLA",
            Self::Land => "LAND",
            Self::Commercial => "COMMERCIAL",
            Self::Industrial => "INDUSTRIAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Sale,
    Rental,
}

impl TransactionType {
    const VARIANTS: [(&'static str, Self); 2] = [("SALE", Self::Sale), ("RENTAL", Self::Rental)];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Rental => "RENTAL",
        }
    }
}

/// A validated listing submission, ready for persistence by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub transaction_type: TransactionType,
    pub price: f64,
    pub currency: String,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub total_area: f64,
    pub area_unit: String,
    pub street_address: String,
    pub city_id: String,
}

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_AREA_UNIT: &str = "sqft";

impl ListingDraft {
    /// Validate a raw listing form submission.
    ///
    /// Every field is checked before the result is decided, so one pass
    /// reports all problems. `currency` and `areaUnit` default when absent;
    /// supplied values still face the same type checks.
    pub fn validate(raw: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = fields::string_min(
            raw,
            "title",
            5,
            "Title must be at least 5 characters",
            &mut errors,
        );
        let description = fields::string_min(
            raw,
            "description",
            10,
            "Description must be at least 10 characters",
            &mut errors,
        );
        let property_type =
            fields::closed_enum(raw, "propertyType", &PropertyType::VARIANTS, &mut errors);
        let transaction_type = fields::closed_enum(
            raw,
            "transactionType",
            &TransactionType::VARIANTS,
            &mut errors,
        );
        let price = fields::positive_number(raw, "price", "Price must be positive", &mut errors);
        let currency = fields::string_or_default(raw, "currency", DEFAULT_CURRENCY, &mut errors);
        let bedrooms = fields::non_negative_integer(raw, "bedrooms", &mut errors);
        let bathrooms = fields::non_negative_number(raw, "bathrooms", &mut errors);
        let total_area =
            fields::positive_number(raw, "totalArea", "Area must be positive", &mut errors);
        let area_unit = fields::string_or_default(raw, "areaUnit", DEFAULT_AREA_UNIT, &mut errors);
        let street_address = fields::string_min(
            raw,
            "streetAddress",
            5,
            "Street address is required",
            &mut errors,
        );
        let city_id = fields::non_empty_string(raw, "cityId", "City is required", &mut errors);

        match (
            title,
            description,
            property_type,
            transaction_type,
            price,
            currency,
            bedrooms,
            bathrooms,
            total_area,
            area_unit,
            street_address,
            city_id,
        ) {
            (
                Some(title),
                Some(description),
                Some(property_type),
                Some(transaction_type),
                Some(price),
                Some(currency),
                Some(bedrooms),
                Some(bathrooms),
                Some(total_area),
                Some(area_unit),
                Some(street_address),
                Some(city_id),
            ) if errors.is_empty() => Ok(Self {
                title,
                description,
                property_type,
                transaction_type,
                price,
                currency,
                bedrooms,
                bathrooms,
                total_area,
                area_unit,
                street_address,
                city_id,
            }),
            _ => {
                tracing::debug!(schema = "listing", count = errors.len(), "form input rejected");
                Err(errors)
            }
        }
    }
}
