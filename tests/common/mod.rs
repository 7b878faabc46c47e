//! Common Test Utilities
//!
//! Shared helpers for the integration tests: a one-shot HTTP server standing
//! in for the Graph API, plus canned response bodies.

#![allow(dead_code)]

use wpp_analytics_cli::config::GraphApiConfig;
use wpp_analytics_cli::graph::GraphApiClient;

/// Graph API version used by every test client
pub const TEST_API_VERSION: &str = "v23.0";

/// Build a client pointed at a mock server
pub fn create_test_client(base_url: &str) -> GraphApiClient {
    GraphApiClient::new(&GraphApiConfig {
        base_url: base_url.to_string(),
        version: TEST_API_VERSION.to_string(),
    })
    .expect("client builds")
}

/// One-shot HTTP server that answers a single request with a canned response
pub mod mock_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Running mock server; await `request` to get the raw request head it received
    pub struct MockGraphServer {
        pub base_url: String,
        pub request: JoinHandle<String>,
    }

    impl MockGraphServer {
        /// Request target (`/path?query`) with percent-encoding undone
        pub async fn received_target(self) -> String {
            let head = self.request.await.expect("mock server task panicked");
            let target = head
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default();
            decode_target(target)
        }
    }

    /// Serve `body` with `status` to the first connection, then stop
    pub async fn serve_once(status: u16, body: &str) -> MockGraphServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let body = body.to_string();

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");

            let mut head = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.expect("read request");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&head).to_string()
        });

        MockGraphServer {
            base_url: format!("http://{}", addr),
            request,
        }
    }

    /// Address nothing is listening on
    pub async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind throwaway listener");
        let addr = listener.local_addr().expect("throwaway listener address");
        drop(listener);
        format!("http://{}", addr)
    }

    /// Decode `/path?k=v&..` with form-urlencoded rules, keeping the parameter order
    fn decode_target(target: &str) -> String {
        match target.split_once('?') {
            Some((path, query)) => {
                let pairs: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                format!("{}?{}", path, pairs.join("&"))
            }
            None => target.to_string(),
        }
    }
}

/// Canned Graph API response bodies
pub mod fixtures {
    pub const WBA_ID: &str = "932157148829117";

    pub const ANALYTICS_RESPONSE: &str = r#"{
        "analytics": {
            "phone_numbers": ["551148619349"],
            "granularity": "DAY",
            "data_points": [
                {"start": 1750474800, "end": 1750561200, "sent": 523, "delivered": 539},
                {"start": 1750561200, "end": 1750647600, "sent": 92, "delivered": 100}
            ]
        },
        "id": "932157148829117"
    }"#;

    pub const TEMPLATE_ANALYTICS_RESPONSE: &str = r#"{
        "data": [{
            "granularity": "DAILY",
            "product_type": "cloud_api",
            "data_points": [{
                "template_id": "1026573095658757",
                "start": 1750377600,
                "end": 1750464000,
                "sent": 871,
                "delivered": 789,
                "read": 399,
                "clicked": [{"type": "quick_reply_button", "button_content": "Quero negociar", "count": 56}],
                "cost": [{"type": "amount_spent", "value": 6.18}, {"type": "cost_per_delivered", "value": 0.01}]
            }, {
                "template_id": "1026573095658757",
                "start": 1750464000,
                "end": 1750550400,
                "sent": 0,
                "delivered": 6,
                "read": 36,
                "clicked": [{"type": "quick_reply_button", "button_content": "Quero negociar", "count": 4}],
                "cost": [{"type": "amount_spent", "value": 0.04}]
            }]
        }],
        "paging": {"cursors": {"before": "MAZDZD", "after": "MjQZD"}}
    }"#;

    pub const TEMPLATE_LIST_RESPONSE: &str = r#"{
        "data": [
            {"id": "1026573095658757", "name": "promo_negociacao", "language": "pt_BR", "status": "APPROVED", "category": "MARKETING"},
            {"id": "771234567890123", "name": "codigo_verificacao", "language": "pt_BR", "status": "PENDING", "category": "AUTHENTICATION"}
        ],
        "paging": {"cursors": {"before": "QVFI", "after": "QVFIUmx1WDRhSXlRS2RmVGNfZA"}}
    }"#;

    pub const GRAPH_ERROR_RESPONSE: &str = r#"{"error":{"message":"Invalid OAuth access token - Cannot parse access token","type":"OAuthException","code":190}}"#;
}
