//! Pointing-gesture classification.

use super::landmark::{HandLandmarks, index};

/// Returns true when the hand is pointing: index finger extended while the
/// middle, ring and pinky fingers are folded.
///
/// A finger counts as extended when its tip sits above its middle joint
/// (smaller `y`, since image space grows downward) and as folded when the
/// tip sits below it. Only `y` is compared, so a hand pointing sideways can
/// be misclassified. The thumb is not checked.
pub fn is_pointing(hand: &HandLandmarks) -> bool {
    let index_extended = tip_above_joint(hand, index::INDEX_TIP, index::INDEX_PIP);
    let middle_folded = tip_below_joint(hand, index::MIDDLE_TIP, index::MIDDLE_PIP);
    let ring_folded = tip_below_joint(hand, index::RING_TIP, index::RING_PIP);
    let pinky_folded = tip_below_joint(hand, index::PINKY_TIP, index::PINKY_PIP);

    index_extended && middle_folded && ring_folded && pinky_folded
}

fn tip_above_joint(hand: &HandLandmarks, tip: usize, joint: usize) -> bool {
    hand.get(tip).y < hand.get(joint).y
}

fn tip_below_joint(hand: &HandLandmarks, tip: usize, joint: usize) -> bool {
    hand.get(tip).y > hand.get(joint).y
}
