use crate::error::Result;
use crate::hand::{FingerId, FINGER_COUNT};
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Range of motion used to normalize one finger's measurements.
///
/// Angles are in degrees, pinch distances in meters. Negative values mark a
/// measurement as unused (the third full-curl segment of the thumb, pinch on
/// the thumb, spread on the little finger).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerShapeConfiguration {
    pub minimum_full_curl_degrees1: f32,
    pub maximum_full_curl_degrees1: f32,
    pub minimum_full_curl_degrees2: f32,
    pub maximum_full_curl_degrees2: f32,
    pub minimum_full_curl_degrees3: f32,
    pub maximum_full_curl_degrees3: f32,
    pub minimum_base_curl_degrees: f32,
    pub maximum_base_curl_degrees: f32,
    pub minimum_tip_curl_degrees1: f32,
    pub maximum_tip_curl_degrees1: f32,
    pub minimum_tip_curl_degrees2: f32,
    pub maximum_tip_curl_degrees2: f32,
    pub minimum_pinch_distance: f32,
    pub maximum_pinch_distance: f32,
    pub minimum_spread_degrees: f32,
    pub maximum_spread_degrees: f32,
}

impl FingerShapeConfiguration {
    /// Reference calibration, captured on a Meta Quest 2.
    pub fn reference(finger: FingerId) -> Self {
        match finger {
            FingerId::Thumb => FingerShapeConfiguration {
                minimum_full_curl_degrees1: 132.0,
                maximum_full_curl_degrees1: 162.0,
                minimum_full_curl_degrees2: 129.0,
                maximum_full_curl_degrees2: 180.0,
                minimum_full_curl_degrees3: -1.0,
                maximum_full_curl_degrees3: -1.0,
                minimum_base_curl_degrees: 2.0,
                maximum_base_curl_degrees: 60.0,
                minimum_tip_curl_degrees1: 119.0,
                maximum_tip_curl_degrees1: 169.0,
                minimum_tip_curl_degrees2: 129.0,
                maximum_tip_curl_degrees2: 180.0,
                minimum_pinch_distance: -1.0,
                maximum_pinch_distance: -1.0,
                minimum_spread_degrees: 3.0,
                maximum_spread_degrees: 57.0,
            },
            FingerId::Index => FingerShapeConfiguration {
                minimum_full_curl_degrees1: 102.0,
                maximum_full_curl_degrees1: 180.0,
                minimum_full_curl_degrees2: 90.0,
                maximum_full_curl_degrees2: 174.0,
                minimum_full_curl_degrees3: 120.0,
                maximum_full_curl_degrees3: 180.0,
                minimum_base_curl_degrees: 102.0,
                maximum_base_curl_degrees: 180.0,
                minimum_tip_curl_degrees1: 90.0,
                maximum_tip_curl_degrees1: 174.0,
                minimum_tip_curl_degrees2: 120.0,
                maximum_tip_curl_degrees2: 180.0,
                minimum_pinch_distance: 0.01,
                maximum_pinch_distance: 0.045,
                minimum_spread_degrees: 3.0,
                maximum_spread_degrees: 18.0,
            },
            FingerId::Middle => FingerShapeConfiguration {
                minimum_full_curl_degrees1: 92.0,
                maximum_full_curl_degrees1: 180.0,
                minimum_full_curl_degrees2: 90.0,
                maximum_full_curl_degrees2: 174.0,
                minimum_full_curl_degrees3: 116.0,
                maximum_full_curl_degrees3: 180.0,
                minimum_base_curl_degrees: 92.0,
                maximum_base_curl_degrees: 180.0,
                minimum_tip_curl_degrees1: 90.0,
                maximum_tip_curl_degrees1: 174.0,
                minimum_tip_curl_degrees2: 116.0,
                maximum_tip_curl_degrees2: 180.0,
                minimum_pinch_distance: 0.01,
                maximum_pinch_distance: 0.045,
                minimum_spread_degrees: 3.0,
                maximum_spread_degrees: 20.0,
            },
            FingerId::Ring => FingerShapeConfiguration {
                minimum_full_curl_degrees1: 90.0,
                maximum_full_curl_degrees1: 180.0,
                minimum_full_curl_degrees2: 90.0,
                maximum_full_curl_degrees2: 174.0,
                minimum_full_curl_degrees3: 112.0,
                maximum_full_curl_degrees3: 180.0,
                minimum_base_curl_degrees: 95.0,
                maximum_base_curl_degrees: 180.0,
                minimum_tip_curl_degrees1: 90.0,
                maximum_tip_curl_degrees1: 174.0,
                minimum_tip_curl_degrees2: 112.0,
                maximum_tip_curl_degrees2: 180.0,
                minimum_pinch_distance: 0.01,
                maximum_pinch_distance: 0.045,
                minimum_spread_degrees: 3.0,
                maximum_spread_degrees: 20.0,
            },
            FingerId::Little => FingerShapeConfiguration {
                minimum_full_curl_degrees1: 90.0,
                maximum_full_curl_degrees1: 180.0,
                minimum_full_curl_degrees2: 90.0,
                maximum_full_curl_degrees2: 164.0,
                minimum_full_curl_degrees3: 116.0,
                maximum_full_curl_degrees3: 180.0,
                minimum_base_curl_degrees: 95.0,
                maximum_base_curl_degrees: 180.0,
                minimum_tip_curl_degrees1: 90.0,
                maximum_tip_curl_degrees1: 164.0,
                minimum_tip_curl_degrees2: 116.0,
                maximum_tip_curl_degrees2: 180.0,
                minimum_pinch_distance: 0.01,
                maximum_pinch_distance: 0.045,
                minimum_spread_degrees: -1.0,
                maximum_spread_degrees: -1.0,
            },
        }
    }
}

/// Per-finger calibration: what is in use now, and what a reset returns to.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationStore {
    defaults: [FingerShapeConfiguration; FINGER_COUNT],
    current: [FingerShapeConfiguration; FINGER_COUNT],
}

impl Default for CalibrationStore {
    fn default() -> Self {
        let defaults = [
            FingerShapeConfiguration::reference(FingerId::Thumb),
            FingerShapeConfiguration::reference(FingerId::Index),
            FingerShapeConfiguration::reference(FingerId::Middle),
            FingerShapeConfiguration::reference(FingerId::Ring),
            FingerShapeConfiguration::reference(FingerId::Little),
        ];
        Self {
            defaults,
            current: defaults,
        }
    }
}

impl CalibrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, finger: FingerId) -> &FingerShapeConfiguration {
        &self.current[finger.index()]
    }

    pub fn default_for(&self, finger: FingerId) -> &FingerShapeConfiguration {
        &self.defaults[finger.index()]
    }

    /// Use `configuration` for this finger until the next set or reset.
    pub fn set(&mut self, finger: FingerId, configuration: FingerShapeConfiguration) {
        debug!("Calibration for {} finger changed", finger.as_str());
        self.current[finger.index()] = configuration;
    }

    /// Restore the recorded default for this finger.
    pub fn reset(&mut self, finger: FingerId) {
        debug!("Calibration for {} finger reset", finger.as_str());
        self.current[finger.index()] = self.defaults[finger.index()];
    }

    /// Replace both default and current configuration. Meant for hardware
    /// specific calibration supplied before any detection runs.
    pub fn set_default(&mut self, finger: FingerId, configuration: FingerShapeConfiguration) {
        self.defaults[finger.index()] = configuration;
        self.current[finger.index()] = configuration;
    }

    /// Read calibration overrides from a JSON object keyed by finger name.
    /// Fingers that are not listed keep their reference values.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json_slice(&data)
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let overrides: HashMap<String, FingerShapeConfiguration> = serde_json::from_slice(data)?;
        let mut store = CalibrationStore::default();
        for finger in FingerId::all() {
            if let Some(configuration) = overrides.get(finger.as_str()) {
                info!("Loaded calibration for {} finger", finger.as_str());
                store.set_default(*finger, *configuration);
            }
        }
        for name in overrides.keys() {
            if !FingerId::all().iter().any(|finger| finger.as_str() == name) {
                warn!("Ignoring calibration for unknown finger {:?}", name);
            }
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_reset_restores_default() {
        let mut store = CalibrationStore::new();
        let mut custom = FingerShapeConfiguration::reference(FingerId::Index);
        custom.maximum_pinch_distance = 0.08;

        store.set(FingerId::Index, custom);
        assert_eq!(store.get(FingerId::Index).maximum_pinch_distance, 0.08);
        assert_eq!(
            store.default_for(FingerId::Index).maximum_pinch_distance,
            0.045
        );

        store.reset(FingerId::Index);
        assert_eq!(store.get(FingerId::Index).maximum_pinch_distance, 0.045);
    }

    #[test]
    fn overridden_default_survives_reset() {
        let mut store = CalibrationStore::new();
        let mut hardware = FingerShapeConfiguration::reference(FingerId::Ring);
        hardware.minimum_base_curl_degrees = 80.0;
        store.set_default(FingerId::Ring, hardware);

        let mut runtime = hardware;
        runtime.minimum_base_curl_degrees = 10.0;
        store.set(FingerId::Ring, runtime);
        store.reset(FingerId::Ring);
        assert_eq!(store.get(FingerId::Ring).minimum_base_curl_degrees, 80.0);
    }

    #[test]
    fn disabled_measurements_are_negative() {
        let thumb = FingerShapeConfiguration::reference(FingerId::Thumb);
        assert!(thumb.minimum_full_curl_degrees3 < 0.0);
        assert!(thumb.minimum_pinch_distance < 0.0);
        let little = FingerShapeConfiguration::reference(FingerId::Little);
        assert!(little.maximum_spread_degrees < 0.0);
    }

    #[test]
    fn json_overrides_only_listed_fingers() {
        let mut middle = FingerShapeConfiguration::reference(FingerId::Middle);
        middle.maximum_spread_degrees = 25.0;
        let mut overrides = HashMap::new();
        overrides.insert("middle", middle);
        let json = serde_json::to_vec(&overrides).unwrap();

        let store = CalibrationStore::from_json_slice(&json).unwrap();
        assert_eq!(store.get(FingerId::Middle).maximum_spread_degrees, 25.0);
        assert_eq!(store.default_for(FingerId::Middle).maximum_spread_degrees, 25.0);
        assert_eq!(
            store.get(FingerId::Index),
            &FingerShapeConfiguration::reference(FingerId::Index)
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CalibrationStore::from_json_slice(b"{\"index\": 3}").is_err());
    }
}
