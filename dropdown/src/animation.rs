//! Staggered per-item delay tokens for list animations.

use dropdom::{Document, NodeId};

use crate::config::Animation;

/// Custom style property carrying an item's delay.
pub const DELAY_PROPERTY: &str = "--delay";

/// A delay token consumed by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationDelay {
    /// Unitless position in the stagger sequence.
    Ordinal(u32),
    Millis(i32),
}

impl std::fmt::Display for AnimationDelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordinal(n) => write!(f, "{n}"),
            Self::Millis(ms) => write!(f, "{ms}ms"),
        }
    }
}

/// Delay tokens for `count` items under the given animation mode.
pub fn animation_delays(anim: &Animation, count: usize) -> Vec<AnimationDelay> {
    match anim {
        Animation::SlideRightLeft => (1u32..).take(count).map(AnimationDelay::Ordinal).collect(),
        Animation::Unfold => (-100i32..)
            .step_by(100)
            .take(count)
            .map(AnimationDelay::Millis)
            .collect(),
        Animation::Softdrop | Animation::Other(_) => Vec::new(),
    }
}

/// Write delay tokens onto every `li` inside `host`, in document order.
/// Returns how many items received one.
pub fn apply_delays(doc: &mut Document, host: NodeId, anim: &Animation) -> usize {
    let items: Vec<NodeId> = doc
        .descendants(host)
        .into_iter()
        .filter(|node| doc.tag(*node) == Some("li"))
        .collect();

    let delays = animation_delays(anim, items.len());
    for (item, delay) in items.iter().zip(&delays) {
        doc.set_style_property(*item, DELAY_PROPERTY, delay.to_string());
    }
    delays.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_render_for_css() {
        assert_eq!(AnimationDelay::Ordinal(3).to_string(), "3");
        assert_eq!(AnimationDelay::Millis(-100).to_string(), "-100ms");
        assert_eq!(AnimationDelay::Millis(0).to_string(), "0ms");
    }

    #[test]
    fn test_zero_items() {
        assert!(animation_delays(&Animation::Unfold, 0).is_empty());
    }
}
