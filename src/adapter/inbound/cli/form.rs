//! Interactive record form.
//!
//! Prompts for every field of a sale, starting from `initial`. Used by
//! `add --interactive` with flag values as defaults, and by
//! `edit --interactive` with the stored values as defaults.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::domain::catalog::OTHER_UNIT;
use crate::domain::validation::MIN_QUANTITY;
use crate::domain::{Catalog, FieldPatch, ScoopFields};
use crate::error::Result;

fn check_date(input: &String) -> std::result::Result<(), String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "use YYYY-MM-DD".to_string())
}

fn check_not_blank(input: &String) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        Err("required".to_string())
    } else {
        Ok(())
    }
}

/// Picker position for `current`, or 0 when it is not listed.
fn default_index(choices: &[String], current: &str) -> usize {
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(current.trim()))
        .unwrap_or(0)
}

/// Branch picker entries. A stored branch missing from the catalog is listed
/// first so accepting the default keeps it.
fn branch_choices(catalog: &Catalog, current: &str) -> Vec<String> {
    let mut choices = catalog.branches().to_vec();
    let wanted = current.trim();
    if !wanted.is_empty() && !choices.iter().any(|b| b.eq_ignore_ascii_case(wanted)) {
        choices.insert(0, current.to_string());
    }
    choices
}

/// Prompt for all fields of a sale.
///
/// # Errors
/// Returns an IO error when the terminal cannot be read (for example when
/// stdin is closed).
pub fn prompt(catalog: &Catalog, initial: &ScoopFields) -> Result<ScoopFields> {
    let theme = ColorfulTheme::default();

    let date: String = Input::with_theme(&theme)
        .with_prompt("Date")
        .default(initial.date.clone())
        .validate_with(check_date)
        .interact_text()?;

    let branches = branch_choices(catalog, &initial.branch);
    let branch_index = Select::with_theme(&theme)
        .with_prompt("Branch")
        .items(&branches)
        .default(default_index(&branches, &initial.branch))
        .interact()?;
    let branch = branches
        .get(branch_index)
        .cloned()
        .unwrap_or_else(|| initial.branch.clone());

    let product_name: String = Input::with_theme(&theme)
        .with_prompt("Product name")
        .with_initial_text(initial.product_name.clone())
        .validate_with(check_not_blank)
        .interact_text()?;

    let units = catalog.unit_choices();
    // A stored unit that is not in the catalog preselects "Other".
    let unit_default = if initial.unit.trim().is_empty() {
        0
    } else {
        units
            .iter()
            .position(|u| u.eq_ignore_ascii_case(initial.unit.trim()))
            .unwrap_or(units.len().saturating_sub(1))
    };
    let unit_index = Select::with_theme(&theme)
        .with_prompt("Unit")
        .items(&units)
        .default(unit_default)
        .interact()?;
    let unit = match units.get(unit_index) {
        Some(choice) if choice != OTHER_UNIT => choice.clone(),
        _ => Input::with_theme(&theme)
            .with_prompt("Enter new unit")
            .with_initial_text(initial.unit.clone())
            .validate_with(check_not_blank)
            .interact_text()?,
    };

    let quantity: i64 = Input::with_theme(&theme)
        .with_prompt("Quantity")
        .default(initial.quantity.max(MIN_QUANTITY))
        .validate_with(|q: &i64| -> std::result::Result<(), String> {
            if *q >= MIN_QUANTITY {
                Ok(())
            } else {
                Err(format!("must be at least {MIN_QUANTITY}"))
            }
        })
        .interact_text()?;

    let price_iqd: i64 = Input::with_theme(&theme)
        .with_prompt("Price (IQD)")
        .default(initial.price_iqd.max(0))
        .validate_with(|p: &i64| -> std::result::Result<(), String> {
            if *p >= 0 {
                Ok(())
            } else {
                Err("must not be negative".to_string())
            }
        })
        .interact_text()?;

    Ok(ScoopFields {
        date,
        branch,
        product_name,
        unit,
        quantity,
        price_iqd,
    })
}

/// Patches that turn any record into `fields`.
#[must_use]
pub fn into_patches(fields: ScoopFields) -> Vec<FieldPatch> {
    vec![
        FieldPatch::Date(fields.date),
        FieldPatch::Branch(fields.branch),
        FieldPatch::ProductName(fields.product_name),
        FieldPatch::Unit(fields.unit),
        FieldPatch::Quantity(fields.quantity),
        FieldPatch::PriceIqd(fields.price_iqd),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EditSession, RecordId, ScoopRecord};

    #[test]
    fn date_check_accepts_iso_only() {
        assert!(check_date(&"2024-05-01".to_string()).is_ok());
        assert!(check_date(&"01/05/2024".to_string()).is_err());
    }

    #[test]
    fn blank_check() {
        assert!(check_not_blank(&"  ".to_string()).is_err());
        assert!(check_not_blank(&"Mango".to_string()).is_ok());
    }

    #[test]
    fn default_index_is_case_insensitive() {
        let choices = vec!["Main".to_string(), "Masif".to_string()];
        assert_eq!(default_index(&choices, "masif"), 1);
        assert_eq!(default_index(&choices, "Airport"), 0);
    }

    #[test]
    fn unlisted_stored_branch_is_offered_first() {
        let catalog = Catalog::default();
        let choices = branch_choices(&catalog, "Uptown");
        assert_eq!(choices[0], "Uptown");
        assert_eq!(&choices[1..], catalog.branches());
        assert_eq!(default_index(&choices, "Uptown"), 0);

        assert_eq!(branch_choices(&catalog, "masif"), catalog.branches());
        assert_eq!(branch_choices(&catalog, ""), catalog.branches());
    }

    #[test]
    fn accepting_defaults_keeps_legacy_branch() {
        let stored = ScoopFields {
            date: "2023-12-30".into(),
            branch: "Uptown".into(),
            product_name: "Chocolate".into(),
            unit: "kg".into(),
            quantity: 4,
            price_iqd: 3000,
        };
        let catalog = Catalog::default();
        let choices = branch_choices(&catalog, &stored.branch);
        let accepted = ScoopFields {
            branch: choices[default_index(&choices, &stored.branch)].clone(),
            ..stored.clone()
        };

        let session = EditSession::begin(ScoopRecord::new(RecordId::new(9), stored.clone()))
            .apply_all(into_patches(accepted));
        assert!(!session.is_dirty());
        assert_eq!(session.pending().branch, "Uptown");
    }

    #[test]
    fn patches_rewrite_every_field() {
        let stored = ScoopRecord::new(
            RecordId::new(1),
            ScoopFields {
                date: "2024-05-01".into(),
                branch: "Main".into(),
                product_name: "Vanilla".into(),
                unit: "kg".into(),
                quantity: 3,
                price_iqd: 5000,
            },
        );
        let wanted = ScoopFields {
            date: "2024-06-01".into(),
            branch: "Masif".into(),
            product_name: "Mango".into(),
            unit: "litre".into(),
            quantity: 2,
            price_iqd: 7000,
        };

        let session = EditSession::begin(stored).apply_all(into_patches(wanted.clone()));
        assert_eq!(session.pending(), &wanted);
        assert_eq!(session.changed_fields().len(), 6);
    }
}
