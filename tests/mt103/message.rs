//! Envelope-level behaviour: block split, validity, round-trip

use mt10x_rs::{parse_message, Level, Message, Mt103, Mt10xError};

use super::fixtures::{init_tracing, ALL, MESSAGE1, MESSAGE2, MESSAGE3, MESSAGE4};

#[test]
fn test_round_trip_valid_messages() {
    init_tracing();
    for raw in ALL {
        let message = Message::parse(raw);
        assert!(message.is_valid());
        assert_eq!(message.to_string(), raw);
        assert_eq!(message.raw(), raw);
    }
}

#[test]
fn test_round_trip_keeps_surrounding_whitespace() {
    let raw = format!("\n  {}  \n", MESSAGE2);
    let message = Message::parse(&raw);
    assert!(message.is_valid());
    assert_eq!(message.to_string(), raw);
}

#[test]
fn test_round_trip_invalid_input() {
    for raw in ["", "test", "{1:F01A}{9:X}", "{4::20:A"] {
        assert_eq!(Message::parse(raw).to_string(), raw);
    }
}

#[test]
fn test_message1_blocks() {
    let message = Message::parse(MESSAGE1);
    assert!(message.is_valid());
    assert_eq!(
        message.basic_header().unwrap().raw(),
        "F01ASDFJK20AXXX0987654321"
    );
    assert_eq!(message.application_header().unwrap().raw(), "I103ASDFJK22XXXXN");
    assert!(message.user_header().is_none());
    assert!(message.trailer().is_none());
    assert_eq!(message.text().unwrap().raw(), &MESSAGE1[54..MESSAGE1.len() - 3]);
}

#[test]
fn test_message2_blocks() {
    let message = Message::parse(MESSAGE2);
    assert!(message.is_valid());
    assert_eq!(message.user_header().unwrap().to_string(), "{108:MT103}");
    assert_eq!(message.text().unwrap().raw(), &MESSAGE2[70..MESSAGE2.len() - 3]);
    assert!(message.trailer().is_none());
}

#[test]
fn test_message3_blocks() {
    let message = Message::parse(MESSAGE3);
    assert!(message.is_valid());
    assert_eq!(
        message.user_header().unwrap().raw(),
        "{113:SEPA}{111:001}{121:d2d62e74-4f7d-45dc-a230-85fa259e1694}"
    );
    assert_eq!(message.text().unwrap().raw(), &MESSAGE3[120..MESSAGE3.len() - 3]);
}

#[test]
fn test_message4_blocks() {
    let message = Message::parse(MESSAGE4);
    assert!(message.is_valid());
    assert_eq!(
        message.application_header().unwrap().raw(),
        "O1030919010321BBBBGRA0AXXX00570001710103210920N"
    );
    assert_eq!(
        message.user_header().unwrap().raw(),
        "{108:MT103 003 OF 045}{121:c8b66b47-2bd9-48fe-be90-93c2096f27d2}"
    );
    assert_eq!(message.text().unwrap().raw(), &MESSAGE4[152..MESSAGE4.len() - 39]);
    assert_eq!(message.trailer(), Some("{MAC:75D138E4}{CHK:DE1B0D71FA96}"));
}

#[test]
fn test_invalid_user_header_does_not_invalidate_message() {
    let message = Message::parse(MESSAGE4);
    assert!(message.is_valid());
    assert!(!message.user_header().unwrap().is_valid());
    assert!(message.text().unwrap().is_valid());
}

#[test]
fn test_whitespace_basic_header_is_invalid() {
    let message = Message::parse("{1:   }{4::20:A-}");
    assert!(message.is_valid());
    let basic = message.basic_header().unwrap();
    assert!(!basic.is_valid());
    assert_eq!(basic.raw(), "   ");
    assert!(basic.application_id().is_none());
    assert_eq!(message.text().unwrap().senders_reference(), Some("A"));
}

#[test]
fn test_empty_text_block_is_reported_by_the_body() {
    for raw in ["{1:F01AAAAGRA0AXXX0057000289}{4:-}", "{1:F01AAAAGRA0AXXX0057000289}{4:\n-}"] {
        let message = Message::parse(raw);
        assert!(message.is_valid());
        let text = message.text().unwrap();
        assert!(!text.is_valid());
        assert_eq!(text.error(), Some(&Mt10xError::EmptyInput));
        assert!(text.fields().is_empty());
        assert_eq!(message.to_string(), raw);
    }
}

#[test]
fn test_empty_and_garbage() {
    for raw in ["", "test"] {
        let message = Message::parse(raw);
        assert!(!message.is_valid());
        assert!(message.basic_header().is_none());
        assert!(message.application_header().is_none());
        assert!(message.user_header().is_none());
        assert!(message.text().is_none());
        assert!(message.trailer().is_none());
    }
}

#[test]
fn test_mismatch_reports_message_level() {
    let message = Message::parse("{1:F01A}{2:Z103B}");
    assert!(matches!(
        message.error(),
        Some(Mt10xError::StructuralMismatch {
            level: Level::Message,
            ..
        })
    ));
}

#[test]
fn test_parse_message_result() {
    let message = parse_message(MESSAGE3).unwrap();
    assert_eq!(message.user_header().unwrap().sti(), Some("001"));

    assert_eq!(parse_message("").unwrap_err(), Mt10xError::EmptyInput);
    assert!(parse_message("{1:F01A}trailing").is_err());
}

#[test]
fn test_mt103_alias() {
    let message: Mt103 = Mt103::parse(MESSAGE1);
    assert!(message.is_valid());
}

#[test]
fn test_parse_is_deterministic() {
    for raw in ALL {
        assert_eq!(Message::parse(raw), Message::parse(raw));
    }
}

#[test]
fn test_parse_from_threads() {
    let handles: Vec<_> = ALL
        .iter()
        .map(|&raw| std::thread::spawn(move || Message::parse(raw)))
        .collect();
    for (handle, raw) in handles.into_iter().zip(ALL) {
        assert_eq!(handle.join().unwrap().raw(), raw);
    }
}
