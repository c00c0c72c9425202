use serde::{Deserialize, Serialize};

/// One resolved entry in the browsable catalog: the canonical database id
/// and description for a taxonomy food name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFood {
    pub id: u64,
    pub name: String,
}

/// A taxonomy category with whatever foods resolved successfully, in the
/// taxonomy's declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub name: String,
    pub foods: Vec<CatalogFood>,
}
