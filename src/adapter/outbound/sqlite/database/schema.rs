// Columns are nullable because tables created by older releases had no NOT
// NULL constraints and gained `unit` and `price_iqd` through plain
// `ALTER TABLE ... ADD COLUMN`.

diesel::table! {
    scoops (id) {
        id -> BigInt,
        date -> Nullable<Text>,
        branch -> Nullable<Text>,
        product_name -> Nullable<Text>,
        unit -> Nullable<Text>,
        quantity -> Nullable<BigInt>,
        price_iqd -> Nullable<BigInt>,
    }
}
