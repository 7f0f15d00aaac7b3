// Adapters layer: concrete implementations for external systems. The only
// external collaborator here is the form's HTTP destination; the UI surfaces
// are bound by the host.

pub mod http;
