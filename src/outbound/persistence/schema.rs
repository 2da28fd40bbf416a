//! Diesel table definitions. Kept in sync with `migrations/` by hand.

diesel::table! {
    employees (id) {
        id -> Int4,
        name -> Varchar,
        surname -> Nullable<Varchar>,
        department -> Nullable<Varchar>,
        salary -> Nullable<Int4>,
    }
}
