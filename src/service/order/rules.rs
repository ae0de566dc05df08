use crate::{errors::OrderRuleViolation, model::Product};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

/// Cumulative weight ceiling per order, in the same unit as product weight.
pub const MAX_ORDER_WEIGHT: i64 = 150;

/// Evaluates the order-level business rules against the proposed item set.
/// Rules run independently; every violation is collected, not just the first.
pub fn validate_order(
    order_date: NaiveDate,
    items: &[(Product, i32)],
) -> Result<(), Vec<OrderRuleViolation>> {
    let mut violations = Vec::new();

    let today = Utc::now().date_naive();
    if order_date < today {
        violations.push(OrderRuleViolation::DateInPast(order_date));
    }

    let limit = Decimal::from(MAX_ORDER_WEIGHT);
    let total: Decimal = items
        .iter()
        .map(|(product, quantity)| product.weight * Decimal::from(*quantity))
        .sum();
    if total > limit {
        violations.push(OrderRuleViolation::WeightExceeded { total, limit });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn product(weight: Decimal) -> Product {
        Product {
            product_id: 1,
            name: "crate of apples".to_string(),
            price: 5,
            weight,
            created_at: None,
            updated_at: None,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[test]
    fn accepts_an_order_dated_today() {
        let items = vec![(product(Decimal::from(10)), 2)];
        assert!(validate_order(today(), &items).is_ok());
    }

    #[test]
    fn rejects_an_order_dated_yesterday() {
        let yesterday = today() - Duration::days(1);
        let items = vec![(product(Decimal::from(10)), 2)];
        let violations = validate_order(yesterday, &items).unwrap_err();
        assert_eq!(violations, vec![OrderRuleViolation::DateInPast(yesterday)]);
    }

    #[test]
    fn accepts_a_total_weight_of_exactly_150() {
        let items = vec![(product(Decimal::from(25)), 6)];
        assert!(validate_order(today(), &items).is_ok());
    }

    #[test]
    fn rejects_a_total_weight_just_over_150() {
        // 21.43 * 7 = 150.01
        let items = vec![(product(Decimal::new(2143, 2)), 7)];
        let violations = validate_order(today(), &items).unwrap_err();
        assert_eq!(
            violations,
            vec![OrderRuleViolation::WeightExceeded {
                total: Decimal::new(15001, 2),
                limit: Decimal::from(150),
            }]
        );
    }

    #[test]
    fn sums_weight_across_items() {
        // 10 * 2 + 5 * 4 = 40, well under the ceiling.
        let heavy = product(Decimal::from(10));
        let light = product(Decimal::from(5));
        let items = vec![(heavy, 2), (light, 4)];
        assert!(validate_order(today(), &items).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let yesterday = today() - Duration::days(1);
        let items = vec![(product(Decimal::from(25)), 7)];
        let violations = validate_order(yesterday, &items).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
