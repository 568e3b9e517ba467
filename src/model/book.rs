use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Not checked against the author collection; may dangle.
    #[serde(rename = "authorId")]
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}
