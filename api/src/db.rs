use hub_core::{anyhow::Result, clap, prelude::*};
pub use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Where the orders store lives and how much of it the service may hold
#[derive(Debug, clap::Args)]
pub struct DbArgs {
    /// Connection URL of the orders store, e.g. `postgres://localhost/orders`
    #[arg(long, env)]
    pub database_url: String,
    /// Pool size shared by every resolver
    #[arg(long, env, default_value_t = 16)]
    pub max_connections: u32,
    /// Seconds to wait when opening a connection
    #[arg(long, env, default_value_t = 10)]
    pub connect_timeout: u64,
}

impl DbArgs {
    fn connect_options(self) -> ConnectOptions {
        let Self {
            database_url,
            max_connections,
            connect_timeout,
        } = self;

        let mut options = ConnectOptions::new(database_url);
        options
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(connect_timeout));

        options
    }
}

/// Handle to the process-wide connection pool. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct Connection(DatabaseConnection);

impl Connection {
    /// Open the pool described by `args`. The first connection is made
    /// eagerly so an unreachable store is reported here.
    ///
    /// # Errors
    /// This function fails if the database is unreachable or the URL is malformed
    pub async fn new(args: DbArgs) -> Result<Self> {
        Database::connect(args.connect_options())
            .await
            .map(Self)
            .context("failed to get database connection")
    }

    #[must_use]
    pub fn get(&self) -> &DatabaseConnection {
        &self.0
    }
}

impl From<DatabaseConnection> for Connection {
    fn from(connection: DatabaseConnection) -> Self {
        Self(connection)
    }
}

#[cfg(test)]
mod tests {
    use hub_core::clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Opts {
        #[command(flatten)]
        db: DbArgs,
    }

    #[test]
    fn pool_settings_default_when_only_url_given() {
        let Opts { db } =
            Opts::try_parse_from(["hub-orders", "--database-url", "postgres://localhost/orders"])
                .unwrap();

        assert_eq!(db.database_url, "postgres://localhost/orders");
        assert_eq!(db.max_connections, 16);
        assert_eq!(db.connect_timeout, 10);
    }

    #[test]
    fn connect_options_carry_pool_settings() {
        let options = DbArgs {
            database_url: "postgres://localhost/orders".to_owned(),
            max_connections: 4,
            connect_timeout: 3,
        }
        .connect_options();

        assert_eq!(options.get_url(), "postgres://localhost/orders");
        assert_eq!(options.get_max_connections(), Some(4));
        assert_eq!(options.get_connect_timeout(), Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let args = DbArgs {
            database_url: "sqlite:///nonexistent-dir/hub-orders.db?mode=ro".to_owned(),
            max_connections: 1,
            connect_timeout: 1,
        };

        let err = Connection::new(args).await.unwrap_err();

        assert!(err.to_string().contains("failed to get database connection"));
    }
}
