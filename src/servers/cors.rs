//! Open CORS policy for the dev server.
//!
//! The game client is served from the frontend dev origin, so every
//! response must carry `Access-Control-Allow-Origin: *`, and any OPTIONS
//! request is answered directly as a preflight.

use axum::body::Body;
use http::{header, Method, Request, Response, StatusCode};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

// CORS middleware applied to the whole router
#[derive(Clone)]
pub struct OpenCors<S> {
    inner: S,
}

impl<S> OpenCors<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Service<Request<Body>> for OpenCors<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // Handle preflight OPTIONS requests
            if req.method() == Method::OPTIONS {
                let response = Response::builder()
                    .status(StatusCode::OK)
                    .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                    .header(header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS")
                    .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
                    .body(Body::empty())
                    .unwrap();

                return Ok(response);
            }

            // Process normal request and add the CORS header to the response
            let mut response = inner.call(req).await?;

            response.headers_mut().insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::HeaderValue::from_static("*"),
            );

            Ok(response)
        })
    }
}

// Layer for the middleware
#[derive(Clone)]
pub struct OpenCorsLayer;

impl<S> Layer<S> for OpenCorsLayer {
    type Service = OpenCors<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OpenCors::new(inner)
    }
}
