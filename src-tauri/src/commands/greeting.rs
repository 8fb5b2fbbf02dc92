//! Example native round-trip
use starter_core::GreetResponse;

#[tauri::command]
pub async fn ping(name: String) -> GreetResponse {
    tracing::debug!(name = %name, "Ping");
    starter_core::greet(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let response = ping("Starter".to_string()).await;
        assert_eq!(response.name, "Starter");
        assert_eq!(
            response.greeting,
            "Hello, Starter! You've been greeted from Rust!"
        );
    }
}
