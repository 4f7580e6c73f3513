//! Shared test utilities and fixtures for product catalog tests

use crate::app::models::CatalogProduct;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub mod catalog_tests;

/// Create a catalog product with every field set
pub fn create_test_product(id: i64, brand: &str) -> CatalogProduct {
    CatalogProduct {
        id: Some(id),
        title: Some(format!("Item {}", id)),
        category: Some("electronics".to_string()),
        brand: Some(brand.to_string()),
        rating: Some(4.0),
    }
}

/// JSON body of one listing page with ids `first..first + count`
pub fn page_body(first: i64, count: i64, total: usize) -> String {
    let products: Vec<String> = (first..first + count)
        .map(|id| {
            format!(
                r#"{{"id":{id},"title":"Item {id}","category":"electronics","brand":"Brand{id}","rating":4.5}}"#
            )
        })
        .collect();
    format!(
        r#"{{"products":[{}],"total":{},"skip":{},"limit":{}}}"#,
        products.join(","),
        total,
        first - 1,
        count
    )
}

/// Write a catalog JSON file to a temporary location
pub fn create_catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Extract the `skip` query parameter from a raw HTTP request
fn requested_skip(request: &str) -> usize {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|target| target.split("skip=").nth(1))
        .and_then(|rest| rest.split('&').next())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Serve canned responses on a local port
///
/// `respond` receives the requested `skip` and returns the status code and
/// body. Returns the base URL of the listing endpoint.
pub async fn spawn_catalog_server<F>(respond: F) -> String
where
    F: Fn(usize) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            let mut buffer = vec![0u8; 4096];
            let mut request = String::new();
            while !request.contains("\r\n\r\n") {
                match socket.read(&mut buffer).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.push_str(&String::from_utf8_lossy(&buffer[..n])),
                }
            }

            let (status, body) = respond(requested_skip(&request));
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/products", addr)
}
