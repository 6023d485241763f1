//! `HttpClient` over the browser's fetch, via `gloo-net`.

use gloo_net::http::{Request, RequestBuilder};
use msgdesk::request::HttpMethod;
use msgdesk::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let HttpRequest {
            url,
            method,
            headers,
            body,
        } = req;

        let mut request = builder(method, &url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }
        let request = match body {
            Some(body) => request.body(body),
            None => request.build(),
        }
        .map_err(|e| ApiError::network(e.to_string()).in_op_with("fetch.build", &url))?;

        // A rejected fetch (offline, CORS, DNS) never produced a status.
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()).in_op_with("fetch", &url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()).in_op_with("fetch.body", &url))?;

        log::trace!("[http] {} {} -> {}", method.as_str(), url, status);
        Ok(HttpResponse { status, body })
    }
}
