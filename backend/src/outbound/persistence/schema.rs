//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Vehicle manufacturers, keyed by manufacturer code.
    manufacturers (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Cars offered for sale.
    ///
    /// `manufacturer_id` references `manufacturers.id`; deleting a referenced
    /// manufacturer is rejected by the foreign key.
    cars (id) {
        id -> Int8,
        /// `NEW` or `USED`, enforced by a check constraint.
        condition -> Varchar,
        body -> Varchar,
        model -> Varchar,
        manufacturer_id -> Int4,
        number_of_doors -> Nullable<Int4>,
        fuel_type -> Nullable<Varchar>,
        engine -> Nullable<Varchar>,
        mileage -> Nullable<Int4>,
        model_year -> Nullable<Int4>,
        production_year -> Nullable<Int4>,
        external_color -> Nullable<Varchar>,
        lat -> Float8,
        lon -> Float8,
    }
}

diesel::joinable!(cars -> manufacturers (manufacturer_id));
diesel::allow_tables_to_appear_in_same_query!(cars, manufacturers);
