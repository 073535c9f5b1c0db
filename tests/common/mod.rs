use conference_service::config::{Config, DatabaseConfig, ServerConfig};
use conference_service::startup::Application;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub db: mongodb::Database,
    pub db_name: String,
}

fn test_mongodb_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

impl TestApp {
    /// Spawn the service against a throwaway database on the test MongoDB
    /// instance. Requires a reachable MongoDB at `TEST_MONGODB_URI`.
    pub async fn spawn() -> Self {
        let db_name = format!("conference_test_{}", uuid::Uuid::new_v4());
        let uri = test_mongodb_uri();

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            database: DatabaseConfig {
                url: Some(Secret::new(uri.clone())),
                db_name: Some(db_name.clone()),
            },
            service_name: "conference-service".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        wait_until_healthy(&address).await;

        // Raw handle for seeding collections and for cleanup.
        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("Failed to connect to test MongoDB");
        let db = client.database(&db_name);

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Drop the throwaway database after the test completes.
    pub async fn cleanup(&self) {
        self.db
            .drop(None)
            .await
            .expect("Failed to drop test database");
    }
}

/// Spawn the service with no `DATABASE_URL`, returning the base address.
/// The process must come up anyway and report the missing store in-band.
pub async fn spawn_unconfigured() -> String {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: None,
            db_name: None,
        },
        service_name: "conference-service".to_string(),
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build test application");

    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    wait_until_healthy(&address).await;

    address
}

async fn wait_until_healthy(address: &str) {
    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}
