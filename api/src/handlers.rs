use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_poem::{GraphQLRequest, GraphQLResponse};
use poem::{
    handler,
    web::{Data, Html},
    IntoResponse,
};

use crate::{AppContext, AppState};

#[handler]
pub fn health() {}

#[handler]
pub fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

#[handler]
pub async fn graphql_handler(Data(state): Data<&AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let context = AppContext::new(state.connection.clone());

    state.schema.execute(req.0.data(context)).await.into()
}
