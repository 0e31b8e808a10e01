//! Ordered catalog of block 4 field tags
//!
//! The position of an entry in [`CATALOG`] is also the only position at
//! which its tag is accepted: a body is a subsequence of this list.

/// Typed destination of a tokenized field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    SendersReference,
    TimeIndication,
    BankOperationCode,
    InstructionCode,
    TransactionTypeCode,
    Settlement,
    OriginalOrdered,
    ExchangeRate,
    OrderingCustomer,
    SendingInstitution,
    OrderingInstitution,
    SenderCorrespondent,
    ReceiverCorrespondent,
    Intermediary,
    AccountWithInstitution,
    Beneficiary,
    RemittanceInformation,
    DetailsOfCharges,
    SenderCharges,
    ReceiverCharges,
    SenderToReceiverInformation,
    RegulatoryReporting,
}

/// How far a field value extends and which characters it may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Run of non-whitespace, non-colon characters
    Token { allow_empty: bool },
    /// Everything up to the next colon
    UntilColon,
    /// Everything up to the next tag-shaped token, may span lines
    FreeText,
    /// `/CLASS/HHMM+HHMM` followed by anything up to the next colon
    TimeIndication,
    /// `YYMMDD` + currency + amount
    Settlement,
    /// Currency + amount
    CurrencyAmount,
}

#[derive(Debug)]
pub(crate) struct TagSpec {
    pub kind: FieldKind,
    /// Accepted spellings, e.g. `50A`, `50F`, `50K`
    pub tags: &'static [&'static str],
    pub shape: Shape,
    /// May occur several times in a row
    pub repeatable: bool,
}

const fn tag_entry(kind: FieldKind, tags: &'static [&'static str], shape: Shape) -> TagSpec {
    TagSpec {
        kind,
        tags,
        shape,
        repeatable: false,
    }
}

const fn repeated(kind: FieldKind, tags: &'static [&'static str], shape: Shape) -> TagSpec {
    TagSpec {
        kind,
        tags,
        shape,
        repeatable: true,
    }
}

const TOKEN: Shape = Shape::Token { allow_empty: false };

pub(crate) const CATALOG: &[TagSpec] = &[
    tag_entry(FieldKind::SendersReference, &["20"], TOKEN),
    repeated(FieldKind::TimeIndication, &["13C"], Shape::TimeIndication),
    tag_entry(FieldKind::BankOperationCode, &["23B"], TOKEN),
    tag_entry(FieldKind::InstructionCode, &["23E"], Shape::UntilColon),
    tag_entry(FieldKind::TransactionTypeCode, &["26T"], Shape::UntilColon),
    tag_entry(FieldKind::Settlement, &["32A"], Shape::Settlement),
    tag_entry(FieldKind::OriginalOrdered, &["33B"], Shape::CurrencyAmount),
    tag_entry(FieldKind::ExchangeRate, &["36"], Shape::UntilColon),
    tag_entry(FieldKind::OrderingCustomer, &["50A", "50F", "50K"], Shape::FreeText),
    tag_entry(FieldKind::SendingInstitution, &["51A"], Shape::UntilColon),
    tag_entry(FieldKind::OrderingInstitution, &["52A", "52D"], Shape::FreeText),
    tag_entry(
        FieldKind::SenderCorrespondent,
        &["53A", "53B", "53D"],
        Shape::Token { allow_empty: true },
    ),
    tag_entry(FieldKind::ReceiverCorrespondent, &["54A", "54B", "54D"], Shape::FreeText),
    tag_entry(FieldKind::Intermediary, &["56A", "56C", "56D"], Shape::FreeText),
    tag_entry(
        FieldKind::AccountWithInstitution,
        &["57A", "57B", "57C", "57D"],
        Shape::FreeText,
    ),
    tag_entry(FieldKind::Beneficiary, &["59", "59A"], Shape::FreeText),
    tag_entry(FieldKind::RemittanceInformation, &["70"], Shape::FreeText),
    tag_entry(FieldKind::DetailsOfCharges, &["71A"], Shape::FreeText),
    repeated(FieldKind::SenderCharges, &["71F"], Shape::UntilColon),
    tag_entry(FieldKind::ReceiverCharges, &["71G"], Shape::UntilColon),
    tag_entry(FieldKind::SenderToReceiverInformation, &["72"], Shape::FreeText),
    tag_entry(FieldKind::RegulatoryReporting, &["77B"], Shape::FreeText),
];

/// Find `tag` in the catalog at or after index `from`
pub(crate) fn lookup(tag: &str, from: usize) -> Option<(usize, &'static TagSpec)> {
    CATALOG
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, entry)| entry.tags.iter().any(|t| *t == tag))
}

/// True if `tag` appears anywhere in the catalog
pub(crate) fn is_known(tag: &str) -> bool {
    lookup(tag, 0).is_some()
}
