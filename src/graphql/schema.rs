use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Catalog;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Catalog) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

pub struct QueryRoot;

/// Root query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let catalog = catalog(ctx)?;
        Ok(catalog.list_books().into_iter().map(Into::into).collect())
    }

    /// List of all the authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let catalog = catalog(ctx)?;
        Ok(catalog.list_authors().into_iter().map(Into::into).collect())
    }

    /// A single book by id
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(catalog(ctx)?.find_book(id).map(Into::into))
    }

    /// A single author by id
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(catalog(ctx)?.find_author(id).map(Into::into))
    }
}

pub struct MutationRoot;

/// Root mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let catalog = catalog(ctx)?;
        Ok(catalog.append_book(name, author_id).into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let catalog = catalog(ctx)?;
        Ok(catalog.append_author(name).into())
    }
}
