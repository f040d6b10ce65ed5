//! Combo feasibility from frame data.

/// Frames after the true-combo window within which a follow-up still lands
/// before the target can act reliably.
pub const PSEUDO_COMBO_WINDOW: i32 = 10;

/// Frame data of one attack (30 fps frames).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackFrames {
    pub name: String,
    pub startup: i32,
    pub active: i32,
    pub recovery: i32,
    /// First frame the attack can be cancelled into another.
    pub cancel_frame: i32,
    /// Frames the target stays staggered after being hit.
    pub hitstun: i32,
}

/// How one attack chains into the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboKind {
    /// Target cannot act between the hits.
    True,
    /// Gap is short enough to catch most reactions.
    Pseudo,
    None,
}

/// Classification of an ordered attack pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboPair {
    pub first: String,
    pub second: String,
    /// Frames between the first hit landing and the second connecting.
    pub gap: i32,
    pub kind: ComboKind,
}

/// Classify `first → second`.
///
/// `gap = (first.cancel_frame - first.startup) + second.startup`
pub fn classify_transition(first: &AttackFrames, second: &AttackFrames) -> (i32, ComboKind) {
    let gap = (first.cancel_frame - first.startup) + second.startup;
    let kind = if gap <= first.hitstun {
        ComboKind::True
    } else if gap <= first.hitstun + PSEUDO_COMBO_WINDOW {
        ComboKind::Pseudo
    } else {
        ComboKind::None
    };
    (gap, kind)
}

/// Classify every ordered pair, including an attack into itself.
pub fn pair_attacks(attacks: &[AttackFrames]) -> Vec<ComboPair> {
    attacks
        .iter()
        .flat_map(|first| attacks.iter().map(move |second| (first, second)))
        .map(|(first, second)| {
            let (gap, kind) = classify_transition(first, second);
            ComboPair {
                first: first.name.clone(),
                second: second.name.clone(),
                gap,
                kind,
            }
        })
        .collect()
}
