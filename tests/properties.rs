use proptest::prelude::*;

use vanbus_decode::{
    classify, decode_notifications, is_satnav_frame, notification_text, resolve_template,
    FrameKind, Language, Localized, NotificationStatus, Severity, Template, VanFrame,
    MAX_FRAME_DATA_LENGTH, MAX_IDEN, NOTIFICATION_COUNT,
};

fn arb_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=MAX_FRAME_DATA_LENGTH)
}

#[test]
fn aliased_template_exposes_localized_text() {
    let Template::Literal(text) = resolve_template(0x3F) else {
        panic!("expected a literal template");
    };

    let text: &Localized = text;
    assert_eq!(text.get(Language::German), "7 Reifendruckfühler fehlen!");
    assert_eq!(text.get(Language::Dutch), notification_text(0x3D, Language::Dutch));
}

proptest! {
    #[test]
    fn prop_single_flag_activates_exactly_its_code(
        code in 0..NOTIFICATION_COUNT as u8,
        current_index in any::<u8>(),
        language in arb_language()
    ) {
        let mut bitmap = [0u8; 16];
        bitmap[code as usize / 8] = 1 << (code % 8);

        let active: Vec<_> = decode_notifications(&bitmap, current_index, language)
            .filter(|record| record.active)
            .collect();

        prop_assert_eq!(active.len(), 1);
        prop_assert_eq!(active[0].code, code);
        prop_assert_eq!(active[0].is_current, current_index == code);
    }

    #[test]
    fn prop_at_most_one_current_record(
        bitmap in any::<[u8; 16]>(),
        current_index in any::<u8>(),
        language in arb_language()
    ) {
        let status = NotificationStatus::new(bitmap, current_index);
        let current = status.records(language).filter(|record| record.is_current).count();

        let expected = (current_index as usize) < NOTIFICATION_COUNT
            && (bitmap[current_index as usize / 8] >> (current_index % 8)) & 1 == 1;

        prop_assert_eq!(current, expected as usize);
        prop_assert_eq!(status.current_code().is_some(), expected);
    }

    #[test]
    fn prop_decode_is_idempotent(
        bitmap in any::<[u8; 16]>(),
        current_index in any::<u8>(),
        language in arb_language()
    ) {
        let first: Vec<_> = decode_notifications(&bitmap, current_index, language).collect();
        let second: Vec<_> = decode_notifications(&bitmap, current_index, language).collect();

        prop_assert_eq!(first.len(), NOTIFICATION_COUNT);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_records_follow_table(
        bitmap in any::<[u8; 16]>(),
        current_index in any::<u8>(),
        language in arb_language()
    ) {
        for (position, record) in decode_notifications(&bitmap, current_index, language).enumerate() {
            prop_assert_eq!(record.code as usize, position);
            prop_assert_eq!(record.text, notification_text(record.code, language));
            prop_assert_eq!(record.severity == Severity::Warning, record.text.ends_with('!'));
            prop_assert!(!record.is_current || record.active);
        }
    }

    #[test]
    fn prop_active_count_matches_records(bitmap in any::<[u8; 16]>(), language in arb_language()) {
        let status = NotificationStatus::new(bitmap, 0xFF);
        let active = status.records(language).filter(|record| record.active).count();

        prop_assert_eq!(status.active_count(), active);
    }

    #[test]
    fn prop_short_payload_reads_missing_flags_as_clear(payload in any::<[u8; 14]>()) {
        let status = NotificationStatus::from_payload(&payload, 9).unwrap();

        prop_assert_eq!(&status.bitmap[..14], &payload[..]);
        prop_assert_eq!(&status.bitmap[14..], &[0, 0]);
        prop_assert_eq!(status.current_index, payload[9]);
    }

    #[test]
    fn prop_satnav_frames_carry_three_bytes(iden in 0..=MAX_IDEN, data in arb_payload()) {
        let kind = classify(iden, &data);

        if is_satnav_frame(iden, &data) {
            prop_assert!(data.len() >= 3);
        }

        if kind == FrameKind::SatNavDeviceReport {
            prop_assert_eq!(iden, 0x8C4);
            prop_assert_eq!(data[0], 0x07);
        }

        if kind == FrameKind::Unknown {
            prop_assert_eq!(kind.iden(), None);
        }
    }

    #[test]
    fn prop_changed_bytes_is_symmetric(
        iden in 0..=MAX_IDEN,
        previous in arb_payload(),
        next in arb_payload()
    ) {
        let previous = VanFrame::new(iden, &previous).unwrap();
        let next = VanFrame::new(iden, &next).unwrap();

        let changed = next.changed_bytes(&previous);

        prop_assert_eq!(changed, previous.changed_bytes(&next));
        prop_assert_eq!(changed == 0, next == previous);
        prop_assert!(changed >> next.data().len().max(previous.data().len()) == 0);
    }
}
