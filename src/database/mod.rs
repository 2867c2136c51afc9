use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Shared MongoDB handle, constructed once at startup and injected into
/// handlers via `web::Data`.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool tuning
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let db_name = database_name_from_uri(uri);
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

/// Extract the database name from the URI path, ignoring any query string.
fn database_name_from_uri(uri: &str) -> &str {
    uri.split('/')
        .last()
        .and_then(|s| s.split('?').next())
        .filter(|s| !s.is_empty() && !s.contains(':'))
        .unwrap_or("curdtable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_name_from_uri() {
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/curdtable"),
            "curdtable"
        );
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/mydb?retryWrites=true"),
            "mydb"
        );
    }

    #[test]
    fn test_database_name_defaults_without_path() {
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017"),
            "curdtable"
        );
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/"),
            "curdtable"
        );
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_connection() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/curdtable".to_string());
        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
