use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    // Seeded category records in old exports may predate the creation stamp.
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl Category {
    pub(crate) fn new(id: CategoryId, input: NewCategory, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            created_at,
        }
    }

    pub(crate) fn apply_patch(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for category creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update for an existing category. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The four categories a fresh installation starts with.
pub(crate) fn default_categories(created_at: DateTime<Utc>) -> Vec<Category> {
    [
        ("Electronics", "Electronic devices and accessories"),
        ("Clothing", "Garments and fashion accessories"),
        ("Home", "Household goods"),
        ("Sports", "Sporting equipment and accessories"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (name, description))| Category {
        id: CategoryId::new(idx as u32 + 1),
        name: name.to_string(),
        description: Some(description.to_string()),
        created_at,
    })
    .collect()
}
