use std::rc::Rc;
use std::time::Instant;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::{ok, LocalBoxFuture, Ready};
use log::{debug, info};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every response with a fresh `X-Request-ID` and logs its outcome
pub struct RequestLogger {
    enable_debug_logging: bool,
}

impl RequestLogger {
    pub fn new(enable_debug_logging: bool) -> Self {
        Self {
            enable_debug_logging,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestLoggerMiddleware {
            service: Rc::new(service),
            enable_debug_logging: self.enable_debug_logging,
        })
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: Rc<S>,
    enable_debug_logging: bool,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let enable_debug_logging = self.enable_debug_logging;
        let request_id = Uuid::new_v4().to_string();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();

        if enable_debug_logging {
            debug!("[{}] Processing request: {} {}", request_id, method, path);
        }

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            info!(
                "[{}] {} {} - status: {} in {}ms",
                request_id,
                method,
                path,
                res.status(),
                started.elapsed().as_millis()
            );
            Ok(res)
        })
    }
}
