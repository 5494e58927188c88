use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;

use activities_api::store::ActivityDirectory;
use activities_api::web;

#[tokio::main]
async fn main() {
    // Laad .env bestand
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Bouw de in-memory activity directory met de vaste seed
    let directory = Arc::new(ActivityDirectory::seeded());

    // 3. Bouw de hele applicatie
    let app = web::router(directory);

    // 4. Start de server (met fallback poort)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Kan host/port niet parsen");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Kon niet binden op {}: {}. Probeer fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Kan fallback niet parsen");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Kan niet binden op fallback poort")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server draait op http://{}", bound_addr);
    println!("📍 Activiteitenoverzicht op http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
