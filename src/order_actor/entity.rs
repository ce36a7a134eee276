//! RecordEntity trait implementation for the [`Order`] domain type.
//!
//! New orders take the next sequence number and go to the front of the collection;
//! removals re-sequence the survivors. Both delegate to [`crate::sequence`].

use super::OrderError;
use crate::model::{Order, OrderDraft, OrderId};
use crate::sequence;
use crate::validation::validate_draft;
use record_framework::{Placement, RecordEntity};

impl RecordEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Validates the draft and numbers it against the current collection.
    fn from_create_params(
        id: OrderId,
        draft: OrderDraft,
        existing: &[Self],
    ) -> Result<Self, OrderError> {
        validate_draft(&draft)?;
        let number =
            sequence::try_next_order_number(existing).ok_or(OrderError::SequenceExhausted)?;
        Ok(Order::from_draft(id, number, draft))
    }

    fn placement() -> Placement {
        Placement::Front
    }

    fn after_remove(collection: &mut Vec<Self>) {
        sequence::renumber(collection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> OrderDraft {
        OrderDraft {
            date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
            supplier: "Bofil".into(),
            material: "Fita".into(),
            service_description: None,
            customer: "Cliente".into(),
            commercial: "Ruben".into(),
        }
    }

    #[test]
    fn test_create_numbers_past_highest() {
        let existing = vec![Order::from_draft(OrderId::from("a"), 4, draft())];
        let order = Order::from_create_params(OrderId::from("b"), draft(), &existing).unwrap();
        assert_eq!(order.order_number, 5);
    }

    #[test]
    fn test_create_rejected_when_numbers_exhausted() {
        let existing = vec![Order::from_draft(OrderId::from("a"), u32::MAX, draft())];
        let result = Order::from_create_params(OrderId::from("b"), draft(), &existing);
        assert_eq!(result, Err(OrderError::SequenceExhausted));
    }
}
