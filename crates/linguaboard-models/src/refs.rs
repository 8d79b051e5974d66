//! References to related documents.
//!
//! Depending on the endpoint the backend either returns the id of a related
//! document (`"language": "665f..."`) or the populated document itself
//! (`"language": { "_id": "665f...", "code": "EN", ... }`). [`Ref`] accepts
//! both shapes.

use serde::{Deserialize, Serialize};

/// Entities that carry their own id.
pub trait Identified {
    type Id;

    fn id(&self) -> &Self::Id;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<I, T> {
    Id(I),
    Expanded(Box<T>),
}

impl<I, T> Ref<I, T>
where
    T: Identified<Id = I>,
{
    /// Id of the referenced document, whichever shape was received.
    pub fn id(&self) -> &I {
        match self {
            Self::Id(id) => id,
            Self::Expanded(doc) => doc.id(),
        }
    }

    /// The populated document, if the backend expanded it.
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Expanded(doc) => Some(doc),
        }
    }
}
