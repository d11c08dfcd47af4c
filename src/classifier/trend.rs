use crate::classifier::elements::{destroys, generates, trigram_element};
use crate::model::{Element, Interpretation, RelativeStrength, Sentiment, TrigramPair};
use serde::Deserialize;

/// Which rule table classifies the element pair. `Basic` reproduces the
/// original coarse table with its direction-mixed rule list and reachable
/// fallback; `Scored` covers the full generative/destructive cycles with
/// per-pair scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesetVersion {
    Basic,
    Scored,
}

/// Trait defining the interface for a trend classifier.
pub trait Classifier {
    fn classify(&self, pair: &TrigramPair) -> Interpretation;
}

/// Implementation of the trend classifier. Pure and stateless apart from the
/// selected ruleset; identical inputs always produce identical output.
pub struct TrendClassifier {
    ruleset: RulesetVersion,
}

impl TrendClassifier {
    pub fn new(ruleset: RulesetVersion) -> Self {
        Self { ruleset }
    }
}

impl Classifier for TrendClassifier {
    /// Resolves both elements and evaluates the ruleset's ordered rules,
    /// first match wins. Total over all 64 (upper, lower) pairs.
    fn classify(&self, pair: &TrigramPair) -> Interpretation {
        let upper = trigram_element(pair.upper);
        let lower = trigram_element(pair.lower);

        if upper == lower {
            return comparison(upper);
        }
        match self.ruleset {
            RulesetVersion::Basic => classify_basic(upper, lower),
            RulesetVersion::Scored => classify_scored(upper, lower),
        }
    }
}

/// Equal-element branch, shared by both rulesets.
fn comparison(element: Element) -> Interpretation {
    Interpretation {
        label: "Comparison (consolidation)".into(),
        sentiment: Sentiment::Neutral,
        commentary: format!(
            "Both trigrams resolve to {:?}; the session ranges sideways while pressure builds.",
            element
        ),
        advice: "Accumulation phase. Hold and wait for the range to break.".into(),
        score: 55,
    }
}

/// The original coarse table: three destructive pairs checked first, then
/// three generative pairs as originally written (direction-mixed), then the
/// reachable drift fallback.
fn classify_basic(upper: Element, lower: Element) -> Interpretation {
    use Element::*;
    let destructive = matches!((upper, lower), (Fire, Metal) | (Metal, Wood) | (Earth, Water));
    if destructive {
        return Interpretation {
            label: "Destruction (heavy pressure)".into(),
            sentiment: Sentiment::Bearish,
            commentary: format!("{:?} over {:?}: the elements work against each other.", upper, lower),
            advice: "Divergence is high. Reduce exposure and play defense.".into(),
            score: 30,
        };
    }
    let generative = matches!((upper, lower), (Wood, Fire) | (Earth, Fire) | (Metal, Earth));
    if generative {
        return Interpretation {
            label: "Generation (strong support)".into(),
            sentiment: Sentiment::Bullish,
            commentary: format!("{:?} over {:?}: the pair reinforces itself.", upper, lower),
            advice: "Internal momentum aligns. Opportunities favor the long side.".into(),
            score: 70,
        };
    }
    drift()
}

/// The scored table: total over the classical cycles. The fallback below is
/// unreachable for this table but stays as a plain branch, never a panic.
fn classify_scored(upper: Element, lower: Element) -> Interpretation {
    if generates(lower, upper) {
        return Interpretation {
            label: "Generation (support from below)".into(),
            sentiment: Sentiment::Bullish,
            commentary: format!("{:?} beneath feeds {:?} above; the base carries the move.", lower, upper),
            advice: "Support is structural. Ride the trend, add on dips.".into(),
            score: support_score(lower),
        };
    }
    if generates(upper, lower) {
        return Interpretation {
            label: "Generation (feeding downward)".into(),
            sentiment: Sentiment::Bullish,
            commentary: format!("{:?} above feeds {:?} below; supportive but draining.", upper, lower),
            advice: "Constructive, with less thrust. Take entries selectively.".into(),
            score: feed_score(upper),
        };
    }
    if destroys(upper, lower) {
        return Interpretation {
            label: "Destruction (pressure from above)".into(),
            sentiment: Sentiment::Bearish,
            commentary: format!("{:?} above controls {:?} below; rallies get sold.", upper, lower),
            advice: "Overhead pressure dominates. Defensive positioning only.".into(),
            score: pressure_score(upper),
        };
    }
    if destroys(lower, upper) {
        return Interpretation {
            label: "Destruction (undermined from below)".into(),
            sentiment: Sentiment::Bearish,
            commentary: format!("{:?} beneath undermines {:?} above; the floor is soft.", lower, upper),
            advice: "Support is unreliable. Keep stops tight.".into(),
            score: undermine_score(lower),
        };
    }
    drift()
}

fn drift() -> Interpretation {
    Interpretation {
        label: "Drift (neutral)".into(),
        sentiment: Sentiment::Neutral,
        commentary: "No elemental relation binds the pair; the tape lacks direction.".into(),
        advice: "Signal is weak. Stay cautious and size small.".into(),
        score: 40,
    }
}

// Per-pair score tables for the scored ruleset, keyed by the acting element.

fn support_score(generator: Element) -> i32 {
    use Element::*;
    match generator {
        Wood => 95,
        Fire | Earth => 85,
        Metal | Water => 75,
    }
}

fn feed_score(generator: Element) -> i32 {
    use Element::*;
    match generator {
        Wood | Fire => 75,
        Earth | Metal | Water => 65,
    }
}

fn pressure_score(destroyer: Element) -> i32 {
    use Element::*;
    match destroyer {
        Fire | Metal => -85,
        Wood | Water | Earth => -75,
    }
}

fn undermine_score(destroyer: Element) -> i32 {
    use Element::*;
    match destroyer {
        Fire | Metal => -65,
        Wood | Water | Earth => -60,
    }
}

/// Margin inside which two readings count as moving together.
const SYNC_MARGIN: i32 = 15;

/// Compares an instrument reading against its sector reading by score.
pub fn compare_strength(sector: &Interpretation, instrument: &Interpretation) -> RelativeStrength {
    let delta = instrument.score - sector.score;
    if delta > SYNC_MARGIN {
        RelativeStrength::Leading
    } else if delta < -SYNC_MARGIN {
        RelativeStrength::Lagging
    } else {
        RelativeStrength::Synchronized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(upper: u8, lower: u8) -> TrigramPair {
        TrigramPair { upper, lower, change_line: None }
    }

    #[test]
    fn both_rulesets_are_total_over_all_64_pairs() {
        for ruleset in [RulesetVersion::Basic, RulesetVersion::Scored] {
            let classifier = TrendClassifier::new(ruleset);
            for upper in 1..=8 {
                for lower in 1..=8 {
                    let interp = classifier.classify(&pair(upper, lower));
                    assert!(!interp.label.is_empty());
                }
            }
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = TrendClassifier::new(RulesetVersion::Scored);
        let a = classifier.classify(&pair(3, 7));
        let b = classifier.classify(&pair(3, 7));
        assert_eq!(a, b);
    }

    #[test]
    fn equal_elements_compare_in_both_rulesets() {
        for ruleset in [RulesetVersion::Basic, RulesetVersion::Scored] {
            let classifier = TrendClassifier::new(ruleset);
            // 1 and 2 are both Metal.
            let interp = classifier.classify(&pair(1, 2));
            assert_eq!(interp.sentiment, Sentiment::Neutral);
            assert_eq!(interp.score, 55);
        }
    }

    #[test]
    fn scenario_300403_scored_is_generative_bullish() {
        // upper 3 = Fire, lower 7 = Earth; Fire generates Earth.
        let classifier = TrendClassifier::new(RulesetVersion::Scored);
        let interp = classifier.classify(&pair(3, 7));
        assert_eq!(interp.sentiment, Sentiment::Bullish);
        assert!(interp.score > 55);
    }

    #[test]
    fn scenario_300403_basic_falls_through_to_drift() {
        // Fire over Earth is in neither of the basic rule lists.
        let classifier = TrendClassifier::new(RulesetVersion::Basic);
        let interp = classifier.classify(&pair(3, 7));
        assert_eq!(interp.sentiment, Sentiment::Neutral);
        assert_eq!(interp.score, 40);
    }

    #[test]
    fn basic_rules_are_order_sensitive() {
        let classifier = TrendClassifier::new(RulesetVersion::Basic);
        // Fire over Metal destroys; Metal over Fire matches nothing.
        let fire_over_metal = classifier.classify(&pair(3, 1));
        let metal_over_fire = classifier.classify(&pair(1, 3));
        assert_eq!(fire_over_metal.sentiment, Sentiment::Bearish);
        assert_eq!(metal_over_fire.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn scored_rules_split_by_direction() {
        let classifier = TrendClassifier::new(RulesetVersion::Scored);
        // Wood lower generates Fire upper: strongest support.
        let supported = classifier.classify(&pair(3, 4));
        assert_eq!(supported.score, 95);
        // Fire lower generates Earth upper.
        let fed = classifier.classify(&pair(7, 3));
        assert_eq!(fed.score, 85);
        // Fire over Metal: pressure from above.
        let pressured = classifier.classify(&pair(3, 1));
        assert_eq!(pressured.score, -85);
        // Metal lower undermines... Metal destroys Wood: Wood upper, Metal lower.
        let undermined = classifier.classify(&pair(4, 1));
        assert_eq!(undermined.score, -65);
    }

    #[test]
    fn scored_bullish_scores_stay_in_their_buckets() {
        let classifier = TrendClassifier::new(RulesetVersion::Scored);
        for upper in 1..=8 {
            for lower in 1..=8 {
                let interp = classifier.classify(&pair(upper, lower));
                if interp.sentiment == Sentiment::Bullish {
                    assert!(
                        [95, 85, 75, 65].contains(&interp.score),
                        "unexpected bullish score {} for ({}, {})",
                        interp.score,
                        upper,
                        lower
                    );
                }
                if interp.sentiment == Sentiment::Bearish {
                    assert!(interp.score < 0);
                }
            }
        }
    }

    #[test]
    fn relative_strength_uses_the_sync_margin() {
        let base = TrendClassifier::new(RulesetVersion::Scored).classify(&pair(3, 4));
        let mut weaker = base.clone();
        weaker.score = base.score - SYNC_MARGIN;
        assert_eq!(compare_strength(&base, &weaker), RelativeStrength::Synchronized);
        weaker.score = base.score - SYNC_MARGIN - 1;
        assert_eq!(compare_strength(&base, &weaker), RelativeStrength::Lagging);
        let mut stronger = base.clone();
        stronger.score = base.score + SYNC_MARGIN + 1;
        assert_eq!(compare_strength(&base, &stronger), RelativeStrength::Leading);
    }
}
