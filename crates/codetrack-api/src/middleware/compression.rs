//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer. Listing responses carry whole files.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}
