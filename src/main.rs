use rusty_bookstore_ddd::{
    adapters::seed,
    application::{book::BookService, user::UserService},
    domain::{DomainEvent, user::User},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// シードカタログ未指定時のサンプル
const SAMPLE_CATALOG: &str = r#"[
    {"title": "1984", "author": "George Orwell", "genre": "Dystopian", "price": 9.99},
    {"title": "Animal Farm", "author": "George Orwell", "genre": "Satire", "price": 7.5},
    {"title": "Brave New World", "author": "Aldous Huxley", "genre": "Dystopian", "price": 10.25},
    {"title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction", "price": 12.0}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_bookstore_ddd=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // カタログの読み込み（BOOKSTORE_SEED_CATALOG 未指定時はサンプル）
    let books = match std::env::var("BOOKSTORE_SEED_CATALOG") {
        Ok(path) => {
            tracing::info!("Loading seed catalog from {}", path);
            seed::load_catalog_file(&path)?
        }
        Err(_) => seed::load_catalog(SAMPLE_CATALOG.as_bytes())?,
    };

    let mut book_service = BookService::new();
    for book in books {
        book_service.add_book(book);
    }
    tracing::info!("Catalog ready with {} books", book_service.len());

    let mut user_service = UserService::new();
    let mut events: Vec<DomainEvent> = Vec::new();

    // 登録とログイン
    let alice = User::new("alice", "secret", "alice@example.com");
    let registered = user_service.try_register_user(alice)?;
    events.push(registered.into());

    if user_service.login_user("alice", "secret").is_none() {
        tracing::error!("Login failed for freshly registered user");
        return Ok(());
    }

    // 検索
    let keyword = std::env::var("BOOKSTORE_DEMO_KEYWORD").unwrap_or_else(|_| "Orwell".into());
    let found: Vec<_> = book_service.search_book(&keyword).into_iter().cloned().collect();
    tracing::info!(keyword = %keyword, hits = found.len(), "Search finished");

    let Some(book) = found.first() else {
        tracing::warn!("Nothing to purchase for keyword {}", keyword);
        return Ok(());
    };

    // 購入とレビュー
    let alice = user_service
        .user_mut("alice")
        .ok_or("registered user disappeared")?;
    events.push(book_service.try_purchase_book(alice, book)?.into());
    events.push(
        book_service
            .try_add_book_review(alice, book, "Unsettling and brilliant.")?
            .into(),
    );

    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}
