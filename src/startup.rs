use crate::configuration::Settings;
use crate::connectors;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let media_service: Arc<dyn connectors::MediaServiceConnector> = Arc::new(
        connectors::media_service::MediaServiceClient::new(&settings.media),
    );
    let media_service = web::Data::new(media_service);

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Malformed JSON body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        let body = serde_json::json!({ "success": false, "message": msg.clone() });
        error::InternalError::from_response(
            msg,
            actix_web::HttpResponse::build(http::StatusCode::BAD_REQUEST).json(body),
        )
        .into()
    });

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in settings.allowed_origins.iter() {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(cors)
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api/products")
                    .service(routes::product::list_handler)
                    .service(routes::product::item_handler)
                    .service(
                        web::scope("")
                            .wrap(middleware::AdminGuard::new())
                            .service(routes::product::admin_list_handler)
                            .service(routes::product::add_handler)
                            .service(routes::product::update_handler)
                            .service(routes::product::delete_handler),
                    ),
            )
            .service(
                web::scope("/api/testimonials")
                    .service(routes::testimonial::add_handler)
                    .service(routes::testimonial::list_handler)
                    .service(
                        web::scope("")
                            .wrap(middleware::AdminGuard::new())
                            .service(routes::testimonial::admin_list_handler)
                            .service(routes::testimonial::approve_handler)
                            .service(routes::testimonial::update_handler)
                            .service(routes::testimonial::delete_handler)
                            .service(routes::testimonial::stats_handler),
                    ),
            )
            .service(
                web::scope("/api/admin")
                    .service(routes::admin::login_handler)
                    .service(
                        web::scope("")
                            .wrap(middleware::AdminGuard::new())
                            .service(routes::admin::logout_handler)
                            .service(routes::admin::stats_handler)
                            .service(routes::admin::activities_handler),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(media_service.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
