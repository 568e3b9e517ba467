use async_graphql::Value;
use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::{TcpListener, ToSocketAddrs};

use crate::error::Result;

use super::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes for the single `/graphql` endpoint.
///
/// POST executes a document. GET serves the console to browsers and
/// otherwise executes the document carried in the query string.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(schema)
}

/// Serve on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, schema: BookshelfSchema) -> Result<()> {
    axum::serve(listener, router(schema)).await?;
    Ok(())
}

pub async fn run_server(schema: BookshelfSchema, addr: impl ToSocketAddrs) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(address = %local, "Server is up and running");
    serve(listener, schema).await
}

async fn graphql_post(State(schema): State<BookshelfSchema>, request: GraphQLRequest) -> Response {
    execute(&schema, request.into_inner()).await
}

async fn graphql_get(
    State(schema): State<BookshelfSchema>,
    headers: HeaderMap,
    request: Request,
) -> Response {
    if accepts_html(&headers) {
        return Html(console_page()).into_response();
    }

    let request = match <GraphQLRequest as FromRequest<BookshelfSchema>>::from_request(
        request, &schema,
    )
    .await
    {
        Ok(request) => request.into_inner(),
        Err(rejection) => return rejection.into_response(),
    };

    if is_mutation(&request) {
        tracing::debug!("Rejected mutation sent over GET");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            Json(serde_json::json!({
                "errors": [
                    { "message": "Can only perform a mutation operation from a POST request." }
                ]
            })),
        )
            .into_response();
    }

    execute(&schema, request).await
}

async fn execute(schema: &BookshelfSchema, request: async_graphql::Request) -> Response {
    let response = schema.execute(request).await;

    // No data at all means the document never ran: bad syntax, failed
    // validation or a missing required argument.
    let status = if response.is_err() && response.data == Value::Null {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    if status == StatusCode::BAD_REQUEST {
        tracing::debug!(errors = response.errors.len(), "Rejected GraphQL request");
    }

    (status, GraphQLResponse::from(response)).into_response()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

/// Whether the operation that would run is a mutation.
fn is_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };

    document.operations.iter().any(|(name, operation)| {
        operation.node.ty == OperationType::Mutation
            && match request.operation_name.as_deref() {
                Some(wanted) => name.map(|n| n.as_str()) == Some(wanted),
                None => true,
            }
    })
}

fn console_page() -> String {
    GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()
}
