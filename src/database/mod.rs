use mongodb::{bson::doc, Client, Collection, Database};
use std::error::Error;

/// Collection holding the User documents
pub const USERS_COLLECTION: &str = "users";

const DEFAULT_DB_NAME: &str = "cruddb";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client and prepares the `users` collection.
    ///
    /// Only an unparseable URI is fatal. Connectivity and index creation are
    /// reported in the log and the service starts anyway.
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&database_name(uri));

        let mongodb = Self { client, db };

        match mongodb.ping().await {
            Ok(()) => log::info!("✅ DataBase is connected ({})", mongodb.db.name()),
            Err(e) => log::warn!("⚠️  DataBase is not reachable yet: {}", e),
        }

        if let Err(e) = mongodb.ensure_indexes().await {
            log::warn!("⚠️  Could not create indexes: {}", e);
        }

        Ok(mongodb)
    }

    /// Creates the unique index backing the one-user-per-email invariant
    async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(USERS_COLLECTION);

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        users.create_index(email_index).await?;
        log::info!("   ✅ Index ready: users(email) unique");

        Ok(())
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Closes the pooled connections once the server has stopped
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Extracts the database name from the URI path, e.g. `mongodb://host/cruddb?x=y`
fn database_name(uri: &str) -> String {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path.split('?').next().unwrap_or_default())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DB_NAME)
        .to_string()
}
