//! Query-language output shapes
//!
//! Every field is nullable at the schema level, matching what both
//! services have always published.

use async_graphql::Object;

use crate::entity::{Author, Book, Publisher};

#[Object]
impl Author {
    async fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    async fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}

#[Object]
impl Publisher {
    async fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    async fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}

#[Object]
impl Book {
    async fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    async fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    async fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    async fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }
}
