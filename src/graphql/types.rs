use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model;
use crate::storage::Catalog;

pub(super) fn catalog<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Catalog> {
    ctx.data::<Catalog>()
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, or null when the key dangles
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        Ok(catalog(ctx)?.find_author(self.author_id).map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents author of a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        Ok(catalog(ctx)?
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
