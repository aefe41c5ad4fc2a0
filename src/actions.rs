//! Cart Actions

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::products::ProductId;

/// Tag for [`Action::Add`].
pub const ADD_ITEM: &str = "ADD_ITEM";

/// Tag for [`Action::UpdateQuantity`].
pub const UPDATE_QUANTITY: &str = "UPDATE_QUANTITY";

/// Errors converting a tagged action record into an [`Action`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The record's `type` is not a known action.
    #[error("Unknown action type: {0}")]
    UnknownKind(String),

    /// A field required by the action type is absent.
    #[error("{kind} action is missing field `{field}`")]
    MissingField {
        /// Action type
        kind: &'static str,
        /// Missing field name
        field: &'static str,
    },

    /// A field was given that the action type does not take.
    #[error("{kind} action does not accept field `{field}`")]
    UnexpectedField {
        /// Action type
        kind: &'static str,
        /// Unexpected field name
        field: &'static str,
    },
}

/// An intended cart state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one unit of a product, creating the line from the catalog if needed.
    Add {
        /// Product to add
        product_id: ProductId,
    },

    /// Change the quantity of an item already in the cart by `delta`.
    UpdateQuantity {
        /// Item to update
        id: ProductId,
        /// Signed quantity change
        delta: i64,
    },
}

impl Action {
    /// Build an [`Action::Add`].
    pub fn add(product_id: impl Into<ProductId>) -> Self {
        Action::Add {
            product_id: product_id.into(),
        }
    }

    /// Build an [`Action::UpdateQuantity`].
    pub fn update_quantity(id: impl Into<ProductId>, delta: i64) -> Self {
        Action::UpdateQuantity {
            id: id.into(),
            delta,
        }
    }

    /// Returns the wire tag for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add { .. } => ADD_ITEM,
            Action::UpdateQuantity { .. } => UPDATE_QUANTITY,
        }
    }

    /// Returns the product id the action targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            Action::Add { product_id } => product_id,
            Action::UpdateQuantity { id, .. } => id,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add { product_id } => write!(f, "{ADD_ITEM} {product_id}"),
            Action::UpdateQuantity { id, delta } => write!(f, "{UPDATE_QUANTITY} {id} {delta:+}"),
        }
    }
}

/// Tagged action as it appears in action scripts
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRecord {
    /// Action type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Product or item id
    pub id: ProductId,

    /// Quantity change, for `UPDATE_QUANTITY` only
    #[serde(default)]
    pub delta: Option<i64>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = ActionError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        match (record.kind.as_str(), record.delta) {
            (ADD_ITEM, None) => Ok(Action::Add {
                product_id: record.id,
            }),
            (ADD_ITEM, Some(_)) => Err(ActionError::UnexpectedField {
                kind: ADD_ITEM,
                field: "delta",
            }),
            (UPDATE_QUANTITY, Some(delta)) => Ok(Action::UpdateQuantity {
                id: record.id,
                delta,
            }),
            (UPDATE_QUANTITY, None) => Err(ActionError::MissingField {
                kind: UPDATE_QUANTITY,
                field: "delta",
            }),
            _ => Err(ActionError::UnknownKind(record.kind)),
        }
    }
}
