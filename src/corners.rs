//! Bubble corner styling
//!
//! Maps a message's in-group position and its group's authorship side to the
//! four corner radii of its bubble. At a seam between two messages of the
//! same group the seam-side corner is joined (small radius); true group
//! boundaries keep the full radius. Self-authored bubbles join on the
//! top-right/bottom-left diagonal, other-authored bubbles on the
//! top-left/bottom-right diagonal.

use serde::{Deserialize, Serialize};

use crate::types::GroupPosition;

/// Radius class of one bubble corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadius {
    /// The standalone bubble radius
    Full,

    /// The reduced radius used at a seam inside a group
    Joined,
}

/// Radii for the four corners of a message bubble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CornerRadii {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_left: CornerRadius,
    pub bottom_right: CornerRadius,
}

/// Computes the corner radii for a bubble at `position` in its group.
///
/// `self_authored` selects which diagonal joins at seams.
pub fn bubble_corners(position: GroupPosition, self_authored: bool) -> CornerRadii {
    let seam_above = matches!(position, GroupPosition::Inside | GroupPosition::Last);
    let seam_below = matches!(position, GroupPosition::First | GroupPosition::Inside);

    let joined = |seam: bool| {
        if seam {
            CornerRadius::Joined
        } else {
            CornerRadius::Full
        }
    };

    if self_authored {
        CornerRadii {
            top_left: CornerRadius::Full,
            top_right: joined(seam_above),
            bottom_left: joined(seam_below),
            bottom_right: CornerRadius::Full,
        }
    } else {
        CornerRadii {
            top_left: joined(seam_above),
            top_right: CornerRadius::Full,
            bottom_left: CornerRadius::Full,
            bottom_right: joined(seam_below),
        }
    }
}
