//! Converts joint poses into normalized finger shape values.
//!
//! Results are cached per hand and finger. The cache has to be cleared for a
//! hand whenever that hand receives new joint data; [`crate::tracker::HandTracker`]
//! does this on every update.

use crate::calibration::{CalibrationStore, FingerShapeConfiguration};
use crate::geometry::{angle_between, clamp01, degrees_between, localize_to_frame};
use crate::hand::{FingerId, Hand, Handedness, JointId, FINGER_COUNT};
use crate::shape::{FingerShape, FingerShapeType, FingerShapeTypes};
use log::*;
use nalgebra as na;

const HANDEDNESS_COUNT: usize = 2;

pub struct FingerShapeCalculator {
    cache: [[FingerShape; FINGER_COUNT]; HANDEDNESS_COUNT],
    calibration: CalibrationStore,
}

impl Default for FingerShapeCalculator {
    fn default() -> Self {
        FingerShapeCalculator::new(CalibrationStore::default())
    }
}

impl FingerShapeCalculator {
    pub fn new(calibration: CalibrationStore) -> Self {
        Self {
            cache: [[FingerShape::default(); FINGER_COUNT]; HANDEDNESS_COUNT],
            calibration,
        }
    }

    pub fn calibration(&self) -> &CalibrationStore {
        &self.calibration
    }

    pub fn calibration_mut(&mut self) -> &mut CalibrationStore {
        &mut self.calibration
    }

    /// Calculate the requested types for one finger with its current
    /// calibration.
    pub fn calculate(
        &mut self,
        hand: &Hand,
        finger: FingerId,
        shape_types: FingerShapeTypes,
    ) -> FingerShape {
        let configuration = *self.calibration.get(finger);
        self.calculate_with(hand, finger, shape_types, &configuration)
    }

    /// Calculate the requested types for one finger with an explicit
    /// calibration. Types already cached for this hand and finger are not
    /// recomputed; types whose joints are unavailable stay unset.
    pub fn calculate_with(
        &mut self,
        hand: &Hand,
        finger: FingerId,
        shape_types: FingerShapeTypes,
        configuration: &FingerShapeConfiguration,
    ) -> FingerShape {
        let shape = &mut self.cache[hand.handedness().index()][finger.index()];
        if shape.types.contains(shape_types) {
            trace!(
                "{} {} shape served from cache",
                hand.handedness().as_str(),
                finger.as_str()
            );
            return *shape;
        }

        let missing = shape_types & !shape.types;
        for shape_type in missing.iter() {
            let value = match shape_type {
                FingerShapeType::FullCurl => full_curl(hand, finger, configuration),
                FingerShapeType::BaseCurl => base_curl(hand, finger, configuration),
                FingerShapeType::TipCurl => tip_curl(hand, finger, configuration),
                FingerShapeType::Pinch => pinch(hand, finger, configuration),
                FingerShapeType::Spread => spread(hand, finger, configuration),
            };
            match value {
                Some(value) => shape.store(shape_type, value),
                None => trace!(
                    "{} {} {} unavailable",
                    hand.handedness().as_str(),
                    finger.as_str(),
                    shape_type.as_str()
                ),
            }
        }
        *shape
    }

    /// Forget every cached value for one hand.
    pub fn clear_cache(&mut self, handedness: Handedness) {
        debug!("{} hand shape cache cleared", handedness.as_str());
        for shape in self.cache[handedness.index()].iter_mut() {
            shape.clear();
        }
    }
}

fn positions<const N: usize>(hand: &Hand, first: JointId) -> Option<[na::Point3<f32>; N]> {
    let mut result = [na::Point3::origin(); N];
    for (step, slot) in result.iter_mut().enumerate() {
        *slot = hand.joint_pose(first.offset(step).ok()?)?.position;
    }
    Some(result)
}

fn rotation(hand: &Hand, first: JointId, step: usize) -> Option<na::UnitQuaternion<f32>> {
    Some(hand.joint_pose(first.offset(step).ok()?)?.rotation)
}

fn normalized(degrees: f32, minimum: f32, maximum: f32) -> f32 {
    (degrees - minimum) / (maximum - minimum)
}

fn full_curl(
    hand: &Hand,
    finger: FingerId,
    configuration: &FingerShapeConfiguration,
) -> Option<f32> {
    let front = finger.front_joint();
    let [p0, p1, p2, p3] = positions::<4>(hand, front)?;
    let r1 = rotation(hand, front, 1)?;
    let r2 = rotation(hand, front, 2)?;

    let mut divisor = 2.0;
    let mut total = normalized(
        angle_between(&p0, &p1, &r1, &p2),
        configuration.minimum_full_curl_degrees1,
        configuration.maximum_full_curl_degrees1,
    ) + normalized(
        angle_between(&p1, &p2, &r2, &p3),
        configuration.minimum_full_curl_degrees2,
        configuration.maximum_full_curl_degrees2,
    );

    if finger != FingerId::Thumb {
        let p4 = hand.joint_pose(front.offset(4).ok()?)?.position;
        let r3 = rotation(hand, front, 3)?;
        if configuration.minimum_full_curl_degrees3 > 0.0
            && configuration.maximum_full_curl_degrees3 > 0.0
        {
            divisor = 3.0;
            total += normalized(
                angle_between(&p2, &p3, &r3, &p4),
                configuration.minimum_full_curl_degrees3,
                configuration.maximum_full_curl_degrees3,
            );
        }
    }

    Some(1.0 - clamp01(total / divisor))
}

fn base_curl(
    hand: &Hand,
    finger: FingerId,
    configuration: &FingerShapeConfiguration,
) -> Option<f32> {
    if finger == FingerId::Thumb {
        return thumb_base_curl(hand, configuration);
    }

    let front = finger.front_joint();
    let [p0, p1, p2] = positions::<3>(hand, front)?;
    let r1 = rotation(hand, front, 1)?;
    let degrees = angle_between(&p0, &p1, &r1, &p2);
    Some(
        1.0 - clamp01(normalized(
            degrees,
            configuration.minimum_base_curl_degrees,
            configuration.maximum_base_curl_degrees,
        )),
    )
}

/// The thumb flexes sideways across the palm, so its base curl is measured
/// like spread: against the index metacarpal, in the wrist frame.
fn thumb_base_curl(hand: &Hand, configuration: &FingerShapeConfiguration) -> Option<f32> {
    let wrist = hand.joint_pose(JointId::Wrist)?;
    let this1 = hand.joint_pose(JointId::ThumbMetacarpal)?.position;
    let this2 = hand.joint_pose(JointId::ThumbProximal)?.position;
    let next1 = hand.joint_pose(JointId::IndexMetacarpal)?.position;
    let next2 = hand.joint_pose(JointId::IndexProximal)?.position;

    let inverse = wrist.rotation.inverse();
    let mut to_this = localize_to_frame(&wrist.position, &inverse, &this2)
        - localize_to_frame(&wrist.position, &inverse, &this1);
    let mut to_next = localize_to_frame(&wrist.position, &inverse, &next2)
        - localize_to_frame(&wrist.position, &inverse, &next1);

    to_this.x = 0.0;
    to_next.x = 0.0;
    to_this.z = to_this.z.abs();
    to_next.z = to_next.z.abs();

    if to_this.y > to_next.y {
        return Some(0.0);
    }

    let degrees = degrees_between(&to_this, &to_next);
    Some(clamp01(normalized(
        degrees,
        configuration.minimum_base_curl_degrees,
        configuration.maximum_base_curl_degrees,
    )))
}

fn tip_curl(
    hand: &Hand,
    finger: FingerId,
    configuration: &FingerShapeConfiguration,
) -> Option<f32> {
    let first = JointId::from_index(finger.back_joint().index() - 3).ok()?;
    let [p0, p1, p2, p3] = positions::<4>(hand, first)?;
    let r1 = rotation(hand, first, 1)?;
    let r2 = rotation(hand, first, 2)?;

    let curl1 = 1.0
        - clamp01(normalized(
            angle_between(&p0, &p1, &r1, &p2),
            configuration.minimum_tip_curl_degrees1,
            configuration.maximum_tip_curl_degrees1,
        ));
    let curl2 = 1.0
        - clamp01(normalized(
            angle_between(&p1, &p2, &r2, &p3),
            configuration.minimum_tip_curl_degrees2,
            configuration.maximum_tip_curl_degrees2,
        ));
    Some(0.5 * (curl1 + curl2))
}

fn pinch(hand: &Hand, finger: FingerId, configuration: &FingerShapeConfiguration) -> Option<f32> {
    if finger == FingerId::Thumb {
        return None;
    }

    let tip = hand.joint_pose(finger.back_joint())?.position;
    let thumb_tip = hand.joint_pose(JointId::ThumbTip)?.position;
    Some(pinch_value(
        na::distance_squared(&tip, &thumb_tip),
        configuration.minimum_pinch_distance,
        configuration.maximum_pinch_distance,
    ))
}

fn pinch_value(distance_squared: f32, minimum: f32, maximum: f32) -> f32 {
    if distance_squared > maximum * maximum {
        return 0.0;
    }
    if distance_squared < minimum * minimum {
        return 1.0;
    }
    1.0 - (distance_squared.sqrt() - minimum) / (maximum - minimum)
}

fn spread(hand: &Hand, finger: FingerId, configuration: &FingerShapeConfiguration) -> Option<f32> {
    let next = finger.next()?;
    let wrist = hand.joint_pose(JointId::Wrist)?;

    let (this_ids, next_ids) = if finger == FingerId::Thumb {
        (
            (JointId::ThumbMetacarpal, JointId::ThumbTip),
            (JointId::IndexMetacarpal, JointId::IndexProximal),
        )
    } else {
        let this1 = finger.front_joint().offset(1).ok()?;
        let next1 = next.front_joint().offset(1).ok()?;
        (
            (this1, this1.offset(1).ok()?),
            (next1, next1.offset(1).ok()?),
        )
    };

    let this1 = hand.joint_pose(this_ids.0)?.position;
    let this2 = hand.joint_pose(this_ids.1)?.position;
    let next1 = hand.joint_pose(next_ids.0)?.position;
    let next2 = hand.joint_pose(next_ids.1)?.position;

    let inverse = wrist.rotation.inverse();
    let mut to_this = localize_to_frame(&wrist.position, &inverse, &this2)
        - localize_to_frame(&wrist.position, &inverse, &this1);
    let mut to_next = localize_to_frame(&wrist.position, &inverse, &next2)
        - localize_to_frame(&wrist.position, &inverse, &next1);

    // neighbour crossed over to this finger's side
    let crossed = match hand.handedness() {
        Handedness::Left => to_next.x > to_this.x,
        Handedness::Right => to_next.x < to_this.x,
    };
    if crossed {
        return Some(0.0);
    }

    to_this.y = 0.0;
    to_next.y = 0.0;
    to_this.z = to_this.z.abs();
    to_next.z = to_next.z.abs();

    let degrees = degrees_between(&to_this, &to_next);
    Some(clamp01(normalized(
        degrees,
        configuration.minimum_spread_degrees,
        configuration.maximum_spread_degrees,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fist, open_hand, set_position, HandBuilder};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn full_curl_two_segment_scenario() {
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Index, [50.0, 50.0, 0.0])
            .build();
        let mut configuration = FingerShapeConfiguration::reference(FingerId::Index);
        configuration.minimum_full_curl_degrees1 = 100.0;
        configuration.maximum_full_curl_degrees1 = 180.0;
        configuration.minimum_full_curl_degrees2 = 90.0;
        configuration.maximum_full_curl_degrees2 = 170.0;
        configuration.minimum_full_curl_degrees3 = -1.0;
        configuration.maximum_full_curl_degrees3 = -1.0;

        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::FULL_CURL,
            &configuration,
        );
        let curl = shape.full_curl().unwrap();
        assert!(approx(curl, 0.5625), "curl {}", curl);
    }

    #[test]
    fn full_curl_three_segment_average() {
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Index, [50.0, 50.0, 30.0])
            .build();
        let mut configuration = FingerShapeConfiguration::reference(FingerId::Index);
        configuration.minimum_full_curl_degrees1 = 100.0;
        configuration.maximum_full_curl_degrees1 = 180.0;
        configuration.minimum_full_curl_degrees2 = 90.0;
        configuration.maximum_full_curl_degrees2 = 170.0;
        configuration.minimum_full_curl_degrees3 = 120.0;
        configuration.maximum_full_curl_degrees3 = 180.0;

        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::FULL_CURL,
            &configuration,
        );
        // 1 - (0.375 + 0.5 + 0.5) / 3
        let curl = shape.full_curl().unwrap();
        assert!(approx(curl, 1.0 - 1.375 / 3.0), "curl {}", curl);

        // the same hand without a third threshold averages two segments
        calculator.clear_cache(Handedness::Left);
        configuration.minimum_full_curl_degrees3 = -1.0;
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::FULL_CURL,
            &configuration,
        );
        let curl = shape.full_curl().unwrap();
        assert!(approx(curl, 0.5625), "curl {}", curl);
    }

    #[test]
    fn thumb_full_curl_uses_two_segments() {
        let hand = HandBuilder::new(Handedness::Right)
            .bends(FingerId::Thumb, [30.0, 30.0, 0.0])
            .build();
        let mut configuration = FingerShapeConfiguration::reference(FingerId::Thumb);
        configuration.minimum_full_curl_degrees1 = 120.0;
        configuration.maximum_full_curl_degrees1 = 180.0;
        configuration.minimum_full_curl_degrees2 = 120.0;
        configuration.maximum_full_curl_degrees2 = 180.0;
        // ignored for the thumb
        configuration.minimum_full_curl_degrees3 = 60.0;
        configuration.maximum_full_curl_degrees3 = 180.0;

        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Thumb,
            FingerShapeTypes::FULL_CURL,
            &configuration,
        );
        let curl = shape.full_curl().unwrap();
        assert!(approx(curl, 0.5), "curl {}", curl);
    }

    #[test]
    fn straight_finger_is_uncurled() {
        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate(
            &open_hand(Handedness::Right),
            FingerId::Middle,
            FingerShapeTypes::FULL_CURL | FingerShapeTypes::BASE_CURL | FingerShapeTypes::TIP_CURL,
        );
        assert!(approx(shape.full_curl().unwrap(), 0.0));
        assert!(approx(shape.base_curl().unwrap(), 0.0));
        assert!(approx(shape.tip_curl().unwrap(), 0.0));
    }

    #[test]
    fn fist_is_fully_curled() {
        let mut calculator = FingerShapeCalculator::default();
        let hand = fist(Handedness::Left);
        for finger in &[FingerId::Index, FingerId::Middle, FingerId::Ring, FingerId::Little] {
            let shape = calculator.calculate(&hand, *finger, FingerShapeTypes::ALL);
            assert!(approx(shape.full_curl().unwrap(), 1.0));
            assert!(approx(shape.base_curl().unwrap(), 1.0));
        }
    }

    #[test]
    fn base_curl_endpoints() {
        let mut configuration = FingerShapeConfiguration::reference(FingerId::Ring);
        configuration.minimum_base_curl_degrees = 100.0;
        configuration.maximum_base_curl_degrees = 180.0;
        let mut calculator = FingerShapeCalculator::default();

        // angle at the proximal joint == minimum
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Ring, [80.0, 0.0, 0.0])
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Ring,
            FingerShapeTypes::BASE_CURL,
            &configuration,
        );
        assert!(approx(shape.base_curl().unwrap(), 1.0));

        calculator.clear_cache(Handedness::Left);
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Ring, [40.0, 0.0, 0.0])
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Ring,
            FingerShapeTypes::BASE_CURL,
            &configuration,
        );
        assert!(approx(shape.base_curl().unwrap(), 0.5));
    }

    #[test]
    fn tip_curl_averages_two_segments() {
        let mut configuration = FingerShapeConfiguration::reference(FingerId::Index);
        configuration.minimum_tip_curl_degrees1 = 100.0;
        configuration.maximum_tip_curl_degrees1 = 180.0;
        configuration.minimum_tip_curl_degrees2 = 100.0;
        configuration.maximum_tip_curl_degrees2 = 180.0;
        // intermediate fully bent (angle 100), distal straight (angle 180)
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Index, [0.0, 80.0, 0.0])
            .build();
        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::TIP_CURL,
            &configuration,
        );
        assert!(approx(shape.tip_curl().unwrap(), 0.5));
    }

    #[test]
    fn hyperextended_joint_counts_as_straight() {
        let hand = HandBuilder::new(Handedness::Left)
            .bends(FingerId::Index, [-30.0, 0.0, 0.0])
            .build();
        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate(&hand, FingerId::Index, FingerShapeTypes::BASE_CURL);
        assert_eq!(shape.base_curl(), Some(0.0));
    }

    #[test]
    fn pinch_scenario_and_limits() {
        let configuration = FingerShapeConfiguration::reference(FingerId::Index);
        let mut calculator = FingerShapeCalculator::default();
        let mut hand = open_hand(Handedness::Left);
        let tip = hand.joint_pose(JointId::IndexTip).unwrap().position;

        for (distance, expected) in &[(0.02, 1.0 - 0.01 / 0.035), (0.005, 1.0), (0.06, 0.0)] {
            let thumb_tip = tip + na::Vector3::new(0.0, -*distance, 0.0);
            set_position(&mut hand, JointId::ThumbTip, thumb_tip);
            calculator.clear_cache(Handedness::Left);
            let shape = calculator.calculate_with(
                &hand,
                FingerId::Index,
                FingerShapeTypes::PINCH,
                &configuration,
            );
            let pinch = shape.pinch().unwrap();
            assert!(approx(pinch, *expected), "distance {} pinch {}", distance, pinch);
        }
    }

    #[test]
    fn pinch_is_monotonic() {
        let mut previous = 1.0;
        for step in 0..=50 {
            let distance = step as f32 * 0.001;
            let value = pinch_value(distance * distance, 0.01, 0.045);
            assert!(value <= previous + 1e-6);
            assert!((0.0..=1.0).contains(&value));
            previous = value;
        }
    }

    #[test]
    fn thumb_pinch_and_little_spread_are_unavailable() {
        let mut calculator = FingerShapeCalculator::default();
        let hand = open_hand(Handedness::Right);
        let thumb = calculator.calculate(&hand, FingerId::Thumb, FingerShapeTypes::ALL);
        assert_eq!(thumb.pinch(), None);
        assert!(thumb.spread().is_some());
        let little = calculator.calculate(&hand, FingerId::Little, FingerShapeTypes::ALL);
        assert_eq!(little.spread(), None);
        assert!(!little.types().has(FingerShapeType::Spread));
        assert!(little.pinch().is_some());
    }

    #[test]
    fn spread_between_index_and_middle() {
        let configuration = FingerShapeConfiguration::reference(FingerId::Index);
        let mut calculator = FingerShapeCalculator::default();

        // halfway through the 3..18 degree range
        let hand = HandBuilder::new(Handedness::Left)
            .yaw(FingerId::Index, 10.5)
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::SPREAD,
            &configuration,
        );
        assert!(approx(shape.spread().unwrap(), 0.5));

        // index crossed over the middle finger
        calculator.clear_cache(Handedness::Left);
        let hand = HandBuilder::new(Handedness::Left)
            .yaw(FingerId::Index, -10.5)
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::SPREAD,
            &configuration,
        );
        assert_eq!(shape.spread(), Some(0.0));
    }

    #[test]
    fn spread_mirrors_for_right_hand() {
        let configuration = FingerShapeConfiguration::reference(FingerId::Index);
        let mut calculator = FingerShapeCalculator::default();
        let hand = HandBuilder::new(Handedness::Right)
            .yaw(FingerId::Index, -10.5)
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Index,
            FingerShapeTypes::SPREAD,
            &configuration,
        );
        assert!(approx(shape.spread().unwrap(), 0.5));
    }

    #[test]
    fn thumb_base_curl_against_index() {
        let configuration = FingerShapeConfiguration::reference(FingerId::Thumb);
        let mut calculator = FingerShapeCalculator::default();

        let hand = HandBuilder::new(Handedness::Left)
            .base_pitch(FingerId::Thumb, 31.0)
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Thumb,
            FingerShapeTypes::BASE_CURL,
            &configuration,
        );
        assert!(approx(shape.base_curl().unwrap(), 0.5));

        // thumb raised above the index plane
        calculator.clear_cache(Handedness::Left);
        let hand = HandBuilder::new(Handedness::Left)
            .base_pitch(FingerId::Thumb, -20.0)
            .build();
        let shape = calculator.calculate_with(
            &hand,
            FingerId::Thumb,
            FingerShapeTypes::BASE_CURL,
            &configuration,
        );
        assert_eq!(shape.base_curl(), Some(0.0));
    }

    #[test]
    fn missing_joint_leaves_type_unset() {
        let mut hand = open_hand(Handedness::Left);
        hand.joint_mut(JointId::IndexDistal).invalidate();
        let mut calculator = FingerShapeCalculator::default();
        let shape = calculator.calculate(&hand, FingerId::Index, FingerShapeTypes::ALL);
        assert_eq!(shape.full_curl(), None);
        assert_eq!(shape.tip_curl(), None);
        assert!(shape.base_curl().is_some());
        assert!(shape.pinch().is_some());
        assert!(shape.spread().is_some());
    }

    #[test]
    fn repeated_calculation_is_served_from_cache() {
        let mut calculator = FingerShapeCalculator::default();
        let hand = fist(Handedness::Right);
        let first = calculator.calculate(&hand, FingerId::Ring, FingerShapeTypes::ALL);
        let second = calculator.calculate(&hand, FingerId::Ring, FingerShapeTypes::ALL);
        assert_eq!(first, second);

        // stale until cleared
        let open = open_hand(Handedness::Right);
        let stale = calculator.calculate(&open, FingerId::Ring, FingerShapeTypes::FULL_CURL);
        assert_eq!(stale.full_curl(), first.full_curl());

        calculator.clear_cache(Handedness::Right);
        let fresh = calculator.calculate(&open, FingerId::Ring, FingerShapeTypes::FULL_CURL);
        assert!(approx(fresh.full_curl().unwrap(), 0.0));
    }

    #[test]
    fn cache_is_per_hand() {
        let mut calculator = FingerShapeCalculator::default();
        let hand = fist(Handedness::Left);
        calculator.calculate(&hand, FingerId::Index, FingerShapeTypes::FULL_CURL);
        let right = calculator.calculate(
            &open_hand(Handedness::Right),
            FingerId::Index,
            FingerShapeTypes::FULL_CURL,
        );
        assert!(approx(right.full_curl().unwrap(), 0.0));

        calculator.clear_cache(Handedness::Right);
        let left = calculator.calculate(
            &open_hand(Handedness::Left),
            FingerId::Index,
            FingerShapeTypes::FULL_CURL,
        );
        assert!(approx(left.full_curl().unwrap(), 1.0));
    }

    #[test]
    fn partial_requests_fill_incrementally() {
        let mut calculator = FingerShapeCalculator::default();
        let hand = open_hand(Handedness::Left);
        let shape = calculator.calculate(&hand, FingerId::Middle, FingerShapeTypes::PINCH);
        assert_eq!(shape.types(), FingerShapeTypes::PINCH);
        let shape = calculator.calculate(&hand, FingerId::Middle, FingerShapeTypes::SPREAD);
        assert_eq!(shape.types(), FingerShapeTypes::PINCH | FingerShapeTypes::SPREAD);
    }
}
