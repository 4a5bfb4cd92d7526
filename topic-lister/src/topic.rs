use std::fmt;

use crate::error::InvalidTopicId;

/// Identifier of a topic, the last segment of its resource name.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidTopicId> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidTopicId { name: id });
        }

        Ok(TopicId(id))
    }

    /// Extracts the identifier from `projects/<project>/topics/<id>`.
    ///
    /// A name without any `/` is taken to be the identifier itself.
    pub fn from_resource_name(name: &str) -> Result<Self, InvalidTopicId> {
        let id = match name.rfind('/') {
            Some(slash) => &name[slash + 1..],
            None => name,
        };

        if id.is_empty() {
            return Err(InvalidTopicId {
                name: String::from(name),
            });
        }

        Ok(TopicId(String::from(id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
