use mongodb::{Client, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the server through an existing client
///
/// ```ignore
/// let client = connect_from_config(&config).await?;
/// check_health(&client).await?;
/// ```
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
