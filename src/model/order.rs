//! The purchase order record and its creation payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque, immutable order identifier (a UUID string for new orders).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents one purchase order issued to a supplier.
///
/// # Record Framework
/// This struct implements the [`RecordEntity`](record_framework::RecordEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](record_framework::ResourceActor).
/// See [`crate::order_actor::entity`] for the creation and renumbering hooks.
///
/// Supplier and commercial are stored by *name*, not by directory id: an order is a
/// snapshot of what was chosen when it was issued, and later renames or removals in the
/// settings lists do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub order_number: u32,
    pub supplier: String,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_description: Option<String>,
    pub customer: String,
    pub commercial: String,
}

impl Order {
    /// Builds an order from a draft. The number is assigned by the sequence manager.
    pub fn from_draft(id: OrderId, order_number: u32, draft: OrderDraft) -> Self {
        Self {
            id,
            date: draft.date,
            order_number,
            supplier: draft.supplier,
            material: draft.material,
            service_description: draft.service_description,
            customer: draft.customer,
            commercial: draft.commercial,
        }
    }

    /// The service description, if it holds anything besides whitespace.
    pub fn service_text(&self) -> Option<&str> {
        self.service_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Payload for creating a new order (the order form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub date: NaiveDate,
    pub supplier: String,
    pub material: String,
    pub service_description: Option<String>,
    pub customer: String,
    pub commercial: String,
}

impl OrderDraft {
    /// A blank form the way it opens: today's date and the alphabetically first
    /// supplier and commercial preselected (empty when the list is empty).
    pub fn with_defaults<S: AsRef<str>, C: AsRef<str>>(
        today: NaiveDate,
        supplier_names: &[S],
        commercial_names: &[C],
    ) -> Self {
        Self {
            date: today,
            supplier: first_alphabetically(supplier_names),
            material: String::new(),
            service_description: None,
            customer: String::new(),
            commercial: first_alphabetically(commercial_names),
        }
    }
}

fn first_alphabetically<N: AsRef<str>>(names: &[N]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .min_by(|a, b| crate::browse::compare_names(a, b))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order {
            id: OrderId::from("a1"),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            order_number: 4,
            supplier: "Empaco".into(),
            material: "Cartão canelado".into(),
            service_description: Some("  ".into()),
            customer: "Têxteis Lda".into(),
            commercial: "Isabel".into(),
        }
    }

    #[test]
    fn test_json_uses_stored_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["orderNumber"], 4);
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["serviceDescription"], "  ");
        assert_eq!(json["id"], "a1");
    }

    #[test]
    fn test_missing_service_description_reads_as_none() {
        let raw = r#"{"id":"x","date":"2024-01-02","orderNumber":1,"supplier":"Bofil",
            "material":"Fio","customer":"C","commercial":"Luis"}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.service_description, None);
        assert_eq!(order.service_text(), None);
    }

    #[test]
    fn test_blank_service_description_is_not_service_text() {
        let mut order = sample();
        assert_eq!(order.service_text(), None);
        order.service_description = Some("Corte e vinco".into());
        assert_eq!(order.service_text(), Some("Corte e vinco"));
    }

    #[test]
    fn test_defaults_pick_first_names_alphabetically() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let draft = OrderDraft::with_defaults(
            today,
            &["Socorte", "bofil", "Empaco"],
            &["Marisa", "Carlos"],
        );
        assert_eq!(draft.date, today);
        assert_eq!(draft.supplier, "bofil");
        assert_eq!(draft.commercial, "Carlos");
        assert!(draft.material.is_empty());

        let draft = OrderDraft::with_defaults(today, &["Bofil", "Ágata"], &["Óscar", "Nuno"]);
        assert_eq!(draft.supplier, "Ágata");
        assert_eq!(draft.commercial, "Nuno");

        let empty: [&str; 0] = [];
        let draft = OrderDraft::with_defaults(today, &empty, &empty);
        assert!(draft.supplier.is_empty());
        assert!(draft.commercial.is_empty());
    }
}
