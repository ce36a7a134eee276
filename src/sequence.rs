//! # Sequence Manager
//!
//! Stored orders are numbered `1..N` with no gaps and no duplicates, `N` being the
//! number of stored orders. Creation appends `max + 1`; deletion re-sequences every
//! survivor. Collections are kept newest-numbered-first, which is also the order they are
//! displayed and stored in.
//!
//! Everything here is a pure function of its input. The order actor calls these from
//! inside a single request, so a computed number is always used before anything else
//! can observe the collection.

use crate::model::{Order, OrderDraft, OrderId};

/// The number the next created order will receive: `1` for an empty collection,
/// otherwise one past the highest number in use. Saturates at `u32::MAX`.
pub fn next_order_number(orders: &[Order]) -> u32 {
    try_next_order_number(orders).unwrap_or(u32::MAX)
}

/// Like [`next_order_number`], but `None` once `u32::MAX` is in use.
pub fn try_next_order_number(orders: &[Order]) -> Option<u32> {
    match orders.iter().map(|order| order.order_number).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Creates an order from a draft and prepends it (most recent first).
pub fn create_order(mut orders: Vec<Order>, draft: OrderDraft, id: OrderId) -> (Vec<Order>, Order) {
    let order = Order::from_draft(id, next_order_number(&orders), draft);
    orders.insert(0, order.clone());
    (orders, order)
}

/// Removes the order with `id` and re-sequences the survivors.
///
/// Deleting an unknown id leaves the numbering as it was.
pub fn delete_order(mut orders: Vec<Order>, id: &OrderId) -> Vec<Order> {
    orders.retain(|order| &order.id != id);
    renumber(&mut orders);
    orders
}

/// Restores the `1..N` invariant: sort ascending by current number (keeping the
/// relative history), assign `index + 1`, then flip back to newest first.
pub fn renumber(orders: &mut [Order]) {
    orders.sort_by_key(|order| order.order_number);
    for (index, order) in orders.iter_mut().enumerate() {
        order.order_number = index as u32 + 1;
    }
    orders.reverse();
}

/// Whether the numbers in use are exactly `{1..N}`.
pub fn is_contiguous(orders: &[Order]) -> bool {
    let mut numbers: Vec<u32> = orders.iter().map(|order| order.order_number).collect();
    numbers.sort_unstable();
    numbers
        .iter()
        .enumerate()
        .all(|(index, &number)| number == index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(material: &str) -> OrderDraft {
        OrderDraft {
            date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
            supplier: "Bofil".into(),
            material: material.into(),
            service_description: None,
            customer: "Cliente".into(),
            commercial: "Ruben".into(),
        }
    }

    fn numbered(numbers: &[u32]) -> Vec<Order> {
        numbers
            .iter()
            .map(|&n| Order::from_draft(OrderId(format!("o{n}")), n, draft(&format!("m{n}"))))
            .collect()
    }

    fn numbers(orders: &[Order]) -> Vec<u32> {
        orders.iter().map(|o| o.order_number).collect()
    }

    #[test]
    fn test_empty_collection_starts_at_one() {
        assert_eq!(next_order_number(&[]), 1);
    }

    #[test]
    fn test_next_number_follows_max_not_len() {
        assert_eq!(next_order_number(&numbered(&[2, 7, 3])), 8);
    }

    #[test]
    fn test_next_number_at_u32_max() {
        let full = numbered(&[u32::MAX, 1]);
        assert_eq!(try_next_order_number(&full), None);
        assert_eq!(next_order_number(&full), u32::MAX);
        assert_eq!(try_next_order_number(&numbered(&[u32::MAX - 1])), Some(u32::MAX));
    }

    #[test]
    fn test_creates_assign_one_to_n_in_creation_order() {
        let mut orders = Vec::new();
        for n in 1..=5 {
            let (next, created) = create_order(orders, draft("x"), OrderId(format!("id{n}")));
            assert_eq!(created.order_number, n);
            orders = next;
        }
        assert_eq!(numbers(&orders), [5, 4, 3, 2, 1]);
        assert_eq!(orders[0].id, OrderId::from("id5"));
        assert!(is_contiguous(&orders));
    }

    #[test]
    fn test_delete_middle_renumbers_newest_first() {
        let orders = numbered(&[3, 2, 1]);
        let after = delete_order(orders, &OrderId::from("o2"));

        assert_eq!(numbers(&after), [2, 1]);
        // former #3 is now #2, former #1 keeps #1
        assert_eq!(after[0].id, OrderId::from("o3"));
        assert_eq!(after[1].id, OrderId::from("o1"));
    }

    #[test]
    fn test_delete_then_create_continues_sequence() {
        let orders = delete_order(numbered(&[4, 3, 2, 1]), &OrderId::from("o1"));
        assert_eq!(numbers(&orders), [3, 2, 1]);
        let (orders, created) = create_order(orders, draft("new"), OrderId::from("n"));
        assert_eq!(created.order_number, 4);
        assert!(is_contiguous(&orders));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let orders = numbered(&[3, 2, 1]);
        let after = delete_order(orders.clone(), &OrderId::from("missing"));
        assert_eq!(after, orders);
    }

    #[test]
    fn test_delete_last_order_resets_sequence() {
        let after = delete_order(numbered(&[1]), &OrderId::from("o1"));
        assert!(after.is_empty());
        assert_eq!(next_order_number(&after), 1);
    }

    #[test]
    fn test_renumber_closes_gaps_preserving_history() {
        let mut orders = numbered(&[9, 4, 6]);
        renumber(&mut orders);
        let pairs: Vec<_> = orders.iter().map(|o| (o.id.0.as_str(), o.order_number)).collect();
        assert_eq!(pairs, [("o9", 3), ("o6", 2), ("o4", 1)]);
    }

    #[test]
    fn test_is_contiguous_detects_gaps_and_duplicates() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&numbered(&[2, 1, 3])));
        assert!(!is_contiguous(&numbered(&[1, 3])));
        assert!(!is_contiguous(&numbered(&[1, 1])));
    }
}
