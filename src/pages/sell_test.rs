use super::*;

#[test]
fn validate_listing_input_requires_a_name() {
    assert_eq!(
        validate_listing_input("   ", "12.50"),
        Err("Enter a product name first.")
    );
}

#[test]
fn validate_listing_input_requires_a_numeric_price() {
    assert_eq!(
        validate_listing_input("Walnut Tray", "twelve"),
        Err("Enter the unit price as a number, like 12.50.")
    );
}

#[test]
fn validate_listing_input_rejects_non_positive_prices() {
    assert_eq!(
        validate_listing_input("Walnut Tray", "0"),
        Err("The unit price must be above zero.")
    );
    assert_eq!(
        validate_listing_input("Walnut Tray", "-3"),
        Err("The unit price must be above zero.")
    );
}

#[test]
fn validate_listing_input_summarizes_a_valid_draft() {
    assert_eq!(
        validate_listing_input(" Walnut Tray ", " 12.5 "),
        Ok("Draft saved: Walnut Tray at $12.50 per unit.".to_owned())
    );
}
