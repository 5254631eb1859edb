use mongodb::{Client, Database};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use tracing::debug;
use uuid::Uuid;

/// A throwaway MongoDB instance with a uniquely-named database.
///
/// The container lives as long as this struct; dropping it tears the
/// database down.
///
/// # Example
/// ```ignore
/// let mongo = TestMongo::new().await;
/// let repository = MongoProductRepository::new(&mongo.db);
/// ```
pub struct TestMongo {
    pub client: Client,
    pub db: Database,
    pub url: String,
    _container: ContainerAsync<Mongo>,
}

impl TestMongo {
    /// Start a MongoDB container and connect to a fresh, uniquely-named
    /// database.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("failed to start MongoDB container (is Docker running?)");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("failed to resolve mapped MongoDB port");

        let url = format!("mongodb://127.0.0.1:{}", port);
        debug!("Test MongoDB listening at {}", url);

        let client = Client::with_uri_str(&url)
            .await
            .expect("failed to connect to test MongoDB");

        let db_name = format!("test_{}", Uuid::new_v4().simple());
        let db = client.database(&db_name);

        Self {
            client,
            db,
            url,
            _container: container,
        }
    }
}
