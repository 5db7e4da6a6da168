// Adapters layer: concrete implementations for external systems (SOAP over HTTP, local files).

pub mod codec;
pub mod soap;
pub mod storage;
pub mod xml;
