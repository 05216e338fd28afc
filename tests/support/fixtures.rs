use scoopbook::domain::ScoopFields;

pub fn scoop(
    date: &str,
    branch: &str,
    product: &str,
    unit: &str,
    quantity: i64,
    price_iqd: i64,
) -> ScoopFields {
    ScoopFields {
        date: date.to_string(),
        branch: branch.to_string(),
        product_name: product.to_string(),
        unit: unit.to_string(),
        quantity,
        price_iqd,
    }
}

pub fn vanilla() -> ScoopFields {
    scoop("2024-05-01", "Main", "Vanilla", "kg", 3, 5000)
}

pub fn mango() -> ScoopFields {
    scoop("2024-05-02", "Masif", "Mango", "litre", 2, 7000)
}
