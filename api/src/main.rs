//!

use hub_core::{anyhow::Context as AnyhowContext, tracing::info};
use hub_orders::{app, build_schema, db::Connection, AppState, Args};
use poem::{
    listener::{Listener, TcpListener},
    Server,
};

pub fn main() {
    let opts = hub_core::StartConfig {
        service_name: "hub-orders",
    };

    hub_core::run(opts, |common, args| {
        let Args { port, db } = args;

        common.rt.block_on(async move {
            let connection = Connection::new(db)
                .await
                .context("unable to reach the orders database")?;

            info!("database connection established");

            let state = AppState::new(build_schema(), connection);

            let acceptor = TcpListener::bind(format!("0.0.0.0:{port}"))
                .into_acceptor()
                .await
                .with_context(|| format!("failed to bind port {port}"))?;

            info!("server ready at http://localhost:{port}/graphql");

            Server::new_with_acceptor(acceptor)
                .run(app(state))
                .await
                .context("failed to build graphql server")
        })
    });
}
