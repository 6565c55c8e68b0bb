use crate::domain::page::value_objects::{ComponentId, MetaTagId};

/// Polymorphic rendering block owned by exactly one content version. The
/// payload is schema-less; the type tag tells the front-end how to render it.
/// Components are cloned, never shared, when their owner is cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: ComponentId,
    pub kind: String,
    pub payload: serde_json::Value,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComponent {
    pub kind: String,
    pub payload: serde_json::Value,
    pub position: i32,
}

impl From<&Component> for NewComponent {
    fn from(component: &Component) -> Self {
        Self {
            kind: component.kind.clone(),
            payload: component.payload.clone(),
            position: component.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub id: MetaTagId,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMetaTag {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl From<&MetaTag> for NewMetaTag {
    fn from(meta: &MetaTag) -> Self {
        Self {
            title: meta.title.clone(),
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
        }
    }
}
