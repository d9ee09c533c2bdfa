use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use invoice_dash::auth::{password, rate_limit::RateLimiter};
use invoice_dash::cache::PageCache;
use invoice_dash::config::Config;
use invoice_dash::{app, db};

fn to_io(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(to_io)?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(to_io)?;
    db::run_migrations(&pool).await.map_err(to_io)?;

    let admin_hash = password::hash_password(&config.admin_password).map_err(to_io)?;
    db::seed(&pool, &config.admin_email, &admin_hash)
        .await
        .map_err(to_io)?;

    // Persistent sessions across restarts need SESSION_KEY
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let cache = web::Data::new(PageCache::new());
    let limiter = web::Data::new(RateLimiter::default());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(cache.clone())
            .app_data(limiter.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(app::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
