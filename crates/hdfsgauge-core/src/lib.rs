/// hdfsgauge Core — partition selection, size aggregation, and data model.
///
/// This crate contains all business logic with zero network dependencies.
/// Everything that talks to a socket lives behind two small traits
/// ([`client::DirLister`] and [`publish::GaugePublisher`]), so the whole
/// crate is testable with in-memory fakes.
///
/// # Modules
///
/// - [`model`] — Directory entries, folder-size readings, byte formatting.
/// - [`client`] — The remote-filesystem listing boundary.
/// - [`select`] — Latest-completed-partition selection.
/// - [`walk`] — Depth-first, post-order folder-size aggregation.
/// - [`publish`] — The metrics-publication boundary.
/// - [`run`] — One-shot orchestration of select → walk → push.
pub mod client;
pub mod model;
pub mod publish;
pub mod run;
pub mod select;
pub mod walk;
