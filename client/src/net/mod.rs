//! Data-source modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` is the seam where integrations plug in, and `types` defines the
//! display records every provider returns. The bundled provider is static;
//! nothing here touches the network.

pub mod provider;
pub mod types;
