pub mod genius;
pub mod transport;

pub use genius::{GeniusClient, GeniusError, extract_artist_id};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
