use crate::{
    api::{employee, leave},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let mutation_limiter = Arc::new(build_limiter(config.rate_mutations_per_min));
    let query_limiter = Arc::new(build_limiter(config.rate_queries_per_min));

    cfg.service(
        web::scope("/leave")
            // /leave/apply
            .service(
                web::resource("/apply")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(leave::apply_leave)),
            )
            // /leave/approve?leaveId=<id>
            .service(
                web::resource("/approve")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(leave::approve_leave)),
            )
            // /leave/reject?leaveId=<id>
            .service(
                web::resource("/reject")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(leave::reject_leave)),
            )
            // /leave/all[?employeeId=<id>]
            .service(
                web::resource("/all")
                    .wrap(query_limiter.clone())
                    .route(web::get().to(leave::leave_list)),
            ),
    );

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .wrap(mutation_limiter)
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{id}/balance
            .service(
                web::resource("/{id}/balance")
                    .wrap(query_limiter)
                    .route(web::get().to(employee::get_leave_balance)),
            ),
    );
}
