//! Fixed wording printed on the document.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLabels {
    pub order_title: String,
    pub material: String,
    pub service: String,
    pub date: String,
    pub commercial: String,
    pub footnote: String,
    pub footer: String,
}

impl Default for DocumentLabels {
    fn default() -> Self {
        Self {
            order_title: "Order No.".into(),
            material: "Requested material/service:".into(),
            service: "Service description:".into(),
            date: "Date:".into(),
            commercial: "Commercial:".into(),
            footnote: "All products must be \"OEKO-TEX\" certified".into(),
            footer: "Nastrotex - Purchase Order - docint112026".into(),
        }
    }
}

impl DocumentLabels {
    /// The wording used on the printed Portuguese forms.
    pub fn portuguese() -> Self {
        Self {
            order_title: "Encomenda Nº".into(),
            material: "Material/Serviço Solicitado:".into(),
            service: "Descrição do serviço a realizar:".into(),
            date: "Data:".into(),
            commercial: "Comercial:".into(),
            footnote: "Todos os produtos devem ser certificados \"OEKO-TEX\"".into(),
            footer: "Nastrotex - Nota de Encomenda - docint112026".into(),
        }
    }
}

/// Named label sets selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPreset {
    #[default]
    English,
    Portuguese,
}

impl LabelPreset {
    pub fn labels(self) -> DocumentLabels {
        match self {
            LabelPreset::English => DocumentLabels::default(),
            LabelPreset::Portuguese => DocumentLabels::portuguese(),
        }
    }
}

impl FromStr for LabelPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "pt" | "portuguese" => Ok(Self::Portuguese),
            other => Err(format!("unknown label preset: {other} (expected en or pt)")),
        }
    }
}
