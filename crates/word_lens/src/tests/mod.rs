//! End-to-end tests driving the handler like a host would

mod overlay_session;
