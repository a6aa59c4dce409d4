//! Field rules for product requests.

use axum_helpers::validation::rules::{
    as_bool, as_f64, as_i32, as_text, is_boolean, is_int, is_numeric, is_positive, is_present,
    is_text,
};
use axum_helpers::{Check, FieldRule, FromValidated, RequestInput, Source};

use crate::models::{CreateProduct, ProductId, ReplaceProduct, UpdateProduct};

const ID: FieldRule = FieldRule::path("id", &[Check::new(is_int, "ID must be an integer")]);

const NAME: FieldRule = FieldRule::body(
    "name",
    &[
        Check::new(is_present, "Name is required"),
        Check::new(is_text, "Name must be a string"),
    ],
);

const PRICE: FieldRule = FieldRule::body(
    "price",
    &[
        Check::new(is_present, "Price is required"),
        Check::new(is_numeric, "Price must be a number"),
        Check::new(is_positive, "Price must be greater than 0"),
    ],
);

const AVAILABILITY: FieldRule = FieldRule::body(
    "availability",
    &[Check::new(is_boolean, "Availability must be a boolean")],
);

fn path_id(input: &RequestInput) -> Option<i32> {
    as_i32(input.get(Source::Path, "id"))
}

fn body_product(input: &RequestInput) -> Option<CreateProduct> {
    Some(CreateProduct {
        name: as_text(input.get(Source::Body, "name"))?,
        price: as_f64(input.get(Source::Body, "price"))?,
    })
}

impl FromValidated for ProductId {
    const RULES: &'static [FieldRule] = &[ID];

    fn from_input(input: &RequestInput) -> Option<Self> {
        path_id(input).map(ProductId)
    }
}

impl FromValidated for CreateProduct {
    const RULES: &'static [FieldRule] = &[NAME, PRICE];

    fn from_input(input: &RequestInput) -> Option<Self> {
        body_product(input)
    }
}

impl FromValidated for ReplaceProduct {
    const RULES: &'static [FieldRule] = &[ID, NAME, PRICE, AVAILABILITY];

    fn from_input(input: &RequestInput) -> Option<Self> {
        let CreateProduct { name, price } = body_product(input)?;
        Some(Self {
            id: path_id(input)?,
            update: UpdateProduct {
                name,
                price,
                availability: as_bool(input.get(Source::Body, "availability"))?,
            },
        })
    }
}
