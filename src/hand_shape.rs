use crate::calculator::FingerShapeCalculator;
use crate::condition::FingerShapeCondition;
use crate::hand::Hand;

/// Finger shape conditions that together describe a static hand shape.
///
/// Conditions are checked in order, ending at the first one that fails.
/// Listing the thumb and index first rules out most other shapes early.
#[derive(Debug, Clone, Default)]
pub struct HandShape {
    name: String,
    conditions: Vec<FingerShapeCondition>,
}

impl HandShape {
    pub fn new<S: Into<String>>(name: S, conditions: Vec<FingerShapeCondition>) -> Self {
        Self {
            name: name.into(),
            conditions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conditions(&self) -> &[FingerShapeCondition] {
        &self.conditions
    }

    pub fn conditions_mut(&mut self) -> &mut Vec<FingerShapeCondition> {
        &mut self.conditions
    }

    pub fn check_conditions(&self, hand: &Hand, calculator: &mut FingerShapeCalculator) -> bool {
        if !hand.is_tracked() {
            return false;
        }
        self.conditions
            .iter()
            .all(|condition| condition.check_condition(hand, calculator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::FingerShapeTarget;
    use crate::hand::{FingerId, Handedness};
    use crate::shape::FingerShapeType;
    use crate::test_support::{fist, open_hand};

    fn curled(finger: FingerId) -> FingerShapeCondition {
        FingerShapeCondition::new(
            finger,
            vec![FingerShapeTarget::new(FingerShapeType::FullCurl, 1.0, 0.25)],
        )
    }

    #[test]
    fn untracked_hand_never_matches() {
        let shape = HandShape::new("anything", vec![]);
        let mut calculator = FingerShapeCalculator::default();
        let mut hand = open_hand(Handedness::Left);
        assert!(shape.check_conditions(&hand, &mut calculator));
        hand.set_tracked(false);
        assert!(!shape.check_conditions(&hand, &mut calculator));
    }

    #[test]
    fn all_conditions_must_pass() {
        let shape = HandShape::new(
            "curled",
            vec![curled(FingerId::Index), curled(FingerId::Middle)],
        );
        let mut calculator = FingerShapeCalculator::default();
        assert!(shape.check_conditions(&fist(Handedness::Right), &mut calculator));
        assert!(!shape.check_conditions(&open_hand(Handedness::Left), &mut calculator));
    }

    #[test]
    fn added_condition_takes_effect() {
        let mut shape = HandShape::new("curled", vec![curled(FingerId::Index)]);
        let hand = fist(Handedness::Left);
        let mut calculator = FingerShapeCalculator::default();
        assert!(shape.check_conditions(&hand, &mut calculator));

        shape.conditions_mut().push(FingerShapeCondition::new(
            FingerId::Thumb,
            vec![FingerShapeTarget::new(FingerShapeType::FullCurl, 0.0, 0.1)],
        ));
        assert_eq!(shape.conditions().len(), 2);
        assert!(!shape.check_conditions(&hand, &mut calculator));
    }

    #[test]
    fn failing_condition_stops_evaluation() {
        // index fails first, so the middle finger is never calculated
        let shape = HandShape::new(
            "curled",
            vec![curled(FingerId::Index), curled(FingerId::Middle)],
        );
        let mut calculator = FingerShapeCalculator::default();
        let hand = open_hand(Handedness::Left);
        assert!(!shape.check_conditions(&hand, &mut calculator));

        let cached = calculator.calculate(
            &fist(Handedness::Left),
            FingerId::Middle,
            crate::shape::FingerShapeTypes::FULL_CURL,
        );
        assert!((cached.full_curl().unwrap() - 1.0).abs() < 1e-3);
    }
}
