//! Block 3 through the full message

use mt10x_rs::{Message, UserHeader};

use super::fixtures::{MESSAGE1, MESSAGE2, MESSAGE3, MESSAGE4};

#[test]
fn test_absent_user_header() {
    let message = Message::parse(MESSAGE1);
    assert!(message.is_valid());
    assert!(message.user_header().is_none());
}

#[test]
fn test_message_user_reference_only() {
    let message = Message::parse(MESSAGE2);
    let header = message.user_header().unwrap();
    assert!(header.is_valid());
    assert!(header.bank_priority_code().is_none());
    assert!(header.bpc().is_none());
    assert_eq!(header.message_user_reference(), Some("MT103"));
    assert_eq!(header.mur(), Some("MT103"));
    assert!(header.service_type_identifier().is_none());
    assert!(header.sti().is_none());
    assert!(header.unique_end_to_end_transaction_reference().is_none());
    assert!(header.uetr().is_none());
}

#[test]
fn test_priority_service_type_and_uetr() {
    let message = Message::parse(MESSAGE3);
    let header = message.user_header().unwrap();
    assert!(header.is_valid());
    assert_eq!(header.bank_priority_code(), Some("SEPA"));
    assert!(header.message_user_reference().is_none());
    assert_eq!(header.service_type_identifier(), Some("001"));
    assert_eq!(
        header.unique_end_to_end_transaction_reference(),
        Some("d2d62e74-4f7d-45dc-a230-85fa259e1694")
    );
    assert_eq!(header.uetr(), Some("d2d62e74-4f7d-45dc-a230-85fa259e1694"));
}

#[test]
fn test_user_reference_with_spaces_is_rejected() {
    let message = Message::parse(MESSAGE4);
    let header = message.user_header().unwrap();
    assert!(!header.is_valid());
    assert!(header.error().is_some());
    assert!(header.mur().is_none());
    assert!(header.uetr().is_none());
}

#[test]
fn test_uetr_shape() {
    let accepted = [
        "d2d62e74-4f7d-45dc-8230-85fa259e1694",
        "d2d62e74-4f7d-45dc-9230-85fa259e1694",
        "d2d62e74-4f7d-45dc-a230-85fa259e1694",
        "d2d62e74-4f7d-45dc-b230-85fa259e1694",
        "D2D62E74-4F7D-45DC-B230-85FA259E1694",
    ];
    for uetr in accepted {
        let header = UserHeader::parse(&format!("{{121:{}}}", uetr));
        assert!(header.is_valid(), "{}", uetr);
        assert_eq!(header.uetr(), Some(uetr));
    }

    let rejected = [
        "d2d62e74-4f7d-35dc-a230-85fa259e1694",
        "d2d62e74-4f7d-45dc-c230-85fa259e1694",
        "d2d62e744-f7d-45dc-a230-85fa259e1694",
        "d2d62e74-4f7d-45dc-a230-85fa259e169",
        "d2d62e74-4f7d-45dc-a230-85fa259e1694a",
    ];
    for uetr in rejected {
        let header = UserHeader::parse(&format!("{{113:SEPA}}{{121:{}}}", uetr));
        assert!(!header.is_valid(), "{}", uetr);
        assert!(header.bpc().is_none(), "{}", uetr);
    }
}
