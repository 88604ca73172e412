/// Base points by predicted position for the casual ruleset.
const POINT_VALUES: [i64; 3] = [5, 4, 3];

/// Casual single-player scorer, kept for pools that never adopted tiers.
///
/// A pick found anywhere in the actual top 3 earns its position's base
/// points minus one per spot of displacement, floored at zero. No rarity
/// bonuses, no penalties below zero, no perfect-podium bonus. Shares
/// nothing with the tiered engine.
pub fn score_simple(predicted: &[String; 3], actual: &[String; 3]) -> i64 {
    let mut points = 0;
    for (i, pick) in predicted.iter().enumerate() {
        if let Some(j) = actual.iter().position(|name| name == pick) {
            let displacement = (i as i64 - j as i64).abs();
            points += (POINT_VALUES[i] - displacement).max(0);
        }
    }
    points
}
