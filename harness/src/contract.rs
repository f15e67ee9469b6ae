//! Encoder-facing contracts: decoders and the configured-search bundle.

use cairn_search::contract::SearchSpaceV1;
use cairn_search::engine::TreeSearchV1;

/// Maps a terminal node (or the "none" sentinel) to the domain answer shape.
///
/// Decoders are never consulted by the engine; they exist so a driver can
/// turn the incumbent into the problem's native output at any point,
/// including before exhaustion.
pub trait DecoderV1 {
    /// The node type of the world this decoder belongs to.
    type Node;
    /// The domain-facing answer shape.
    type Answer;

    /// Decode `node`, or produce the world's no-solution fallback for `None`.
    fn decode(&self, node: Option<&Self::Node>) -> Self::Answer;
}

/// What a world factory returns: a stable identifier, the configured
/// search instance, and the matching decoder.
pub struct EncodedSearchV1<S: SearchSpaceV1, D> {
    /// Stable world identifier used in run reports.
    pub world_id: &'static str,
    /// The engine, configured with the world's initial node and order.
    pub search: TreeSearchV1<S>,
    /// Decoder from incumbent to domain answer.
    pub decoder: D,
}

impl<S, D> EncodedSearchV1<S, D>
where
    S: SearchSpaceV1,
    D: DecoderV1<Node = S::Node>,
{
    /// Decode the current incumbent (anytime answer).
    pub fn best_answer(&self) -> D::Answer {
        self.decoder.decode(self.search.best())
    }
}
