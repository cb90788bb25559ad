//! Classification: a named sub-bag of properties attached to an element.

use serde::{Deserialize, Serialize};

use super::{EffectiveWindow, ElementStatus, PropertyBag, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Classification type name, e.g. `Confidentiality`.
    pub name: String,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default)]
    pub effective: EffectiveWindow,
}

impl Classification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ElementStatus::default(),
            properties: PropertyBag::new(),
            effective: EffectiveWindow::default(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }
}
