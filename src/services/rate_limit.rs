use axum::http::Request;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_governor::{GovernorError, key_extractor::KeyExtractor};

/// Per-client key for the API rate limiter.
///
/// Forwarding headers are only honoured when the service sits behind a
/// trusted reverse proxy; otherwise a client could pick its own bucket.
/// Requests with no identifiable peer share the loopback bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIpKeyExtractor {
    pub trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    fn forwarded_ip<T>(req: &Request<T>) -> Option<IpAddr> {
        let headers = req.headers();

        // First hop in X-Forwarded-For is the original client
        let from_xff = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|ip| ip.trim().parse().ok());

        from_xff.or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .and_then(|ip| ip.trim().parse().ok())
        })
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.trust_proxy_headers
            && let Some(ip) = Self::forwarded_ip(req)
        {
            return Ok(ip);
        }

        let peer = req
            .extensions()
            .get::<axum::extract::ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());

        Ok(peer.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)))
    }
}
