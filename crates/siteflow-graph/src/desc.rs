//! Resource description types
//!
//! A [`ResourceDesc`] is a declarative statement of a resource the
//! provisioning engine should bring into existence. Descriptions carry no
//! live handles; attributes the engine produces at apply time (endpoints,
//! generated identifiers) are referenced symbolically through
//! [`AttrValue::Output`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity of a declared resource
///
/// The pair of kind and name is unique within a graph. The kind is a
/// provider vocabulary string such as `"s3-bucket"`, never a Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    /// Resource kind (e.g., "s3-bucket", "cloudfront-distribution")
    pub kind: String,

    /// Resource name, unique per kind
    pub name: String,
}

impl ResourceId {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Get the full resource key (kind:name)
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// A value in a resource payload
///
/// Payload fields either carry a literal known at description time, or
/// name an attribute of another resource that only exists after the
/// engine has applied it. The engine substitutes outputs during apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    /// A value known when the description is built
    Literal(String),

    /// An attribute produced by the engine for another resource
    Output {
        /// The resource whose attribute is referenced
        resource: ResourceId,

        /// Attribute name in the engine's vocabulary (e.g., "website_endpoint")
        attribute: String,
    },
}

impl AttrValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Reference an attribute of another declared resource
    pub fn output_of(resource: &ResourceId, attribute: impl Into<String>) -> Self {
        Self::Output {
            resource: resource.clone(),
            attribute: attribute.into(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// Declarative description of a single resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDesc {
    /// Resource identity
    pub id: ResourceId,

    /// Logical component that declared this resource, for grouping in
    /// engine output (e.g., the website name)
    #[serde(default)]
    pub owner: Option<String>,

    /// Resource this one is nested under (e.g., objects under their bucket)
    #[serde(default)]
    pub parent: Option<ResourceId>,

    /// Resources that must be applied before this one
    #[serde(default)]
    pub depends_on: Vec<ResourceId>,

    /// Kind-specific payload
    pub config: serde_json::Value,
}

impl ResourceDesc {
    /// Build a description from a serializable payload
    pub fn new<C: Serialize>(id: ResourceId, config: &C) -> Result<Self> {
        Ok(Self {
            id,
            owner: None,
            parent: None,
            depends_on: Vec::new(),
            config: serde_json::to_value(config)?,
        })
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_parent(mut self, parent: ResourceId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_dependency(mut self, dependency: ResourceId) -> Self {
        self.depends_on.push(dependency);
        self
    }

    /// Deserialize the payload back into a typed config
    pub fn config_as<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.config.clone())?)
    }
}
