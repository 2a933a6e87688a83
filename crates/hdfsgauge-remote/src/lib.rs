/// hdfsgauge Remote — the two network collaborators.
///
/// Implements the core's boundary traits over HTTP:
///
/// - [`webhdfs`] — directory listings via the WebHDFS REST API.
/// - [`pushgateway`] — gauge batches via the Prometheus Pushgateway.
///
/// Both use `reqwest`'s blocking client: the walk is deliberately
/// single-threaded and synchronous, with at most one request in flight.
pub mod pushgateway;
pub mod webhdfs;

pub use pushgateway::PushgatewayPublisher;
pub use webhdfs::WebHdfsClient;
