use crate::{Kiosk, TOTAL_ACTIVITIES};

use std::str::FromStr;

#[test]
fn test_kiosk_catalog_has_four_entries() {
    assert_eq!(Kiosk::ALL.len(), TOTAL_ACTIVITIES);
}

#[test]
fn test_kiosk_from_str() {
    assert_eq!(
        Kiosk::from_str("kiosk1-guess-the-era").unwrap(),
        Kiosk::GuessTheEra
    );
    assert_eq!(
        Kiosk::from_str("kiosk4-time-capsule").unwrap(),
        Kiosk::TimeCapsule
    );
    assert!(Kiosk::from_str("kiosk5-unknown").is_err());
}

#[test]
fn test_kiosk_id_matches_serde_name() {
    for kiosk in Kiosk::ALL {
        let json = serde_json::to_string(&kiosk).unwrap();
        assert_eq!(json, format!("\"{}\"", kiosk.id()));
    }
}

#[test]
fn test_kiosk_display_metadata() {
    assert_eq!(Kiosk::RebuildingNp.display_name(), "Rebuilding NP");
    assert_eq!(Kiosk::NpTrivia.icon(), "🎯");
}
