/// Content selection - the deterministic core
///
/// `domain` holds the read-only catalog, copy pools and the resolved page model;
/// `services` holds the pure functions that turn a (vertical, slug) request
/// into a page. Nothing in here performs I/O.
pub mod domain;
pub mod services;
