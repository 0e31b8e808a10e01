//! Text block type definitions

use std::fmt;

use chrono::NaiveDate;

use crate::error::Mt10xError;

/// One tokenized `:TAG:value` field, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Tag without colons, e.g. `50K`
    pub tag: String,
    /// Value with surrounding whitespace trimmed
    pub value: String,
}

/// Parsed `:13C:` time indication, e.g. `/CLSTIME/0915+0100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIndication {
    /// `CLSTIME`, `RNCTIME` or `SNDTIME`
    pub class: String,
    /// `HHMM`
    pub time: String,
    /// `+` or `-`
    pub sign: char,
    /// UTC offset, `HHMM`
    pub offset: String,
}

/// Outcome of deriving a calendar date from the `:32A:` digits
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettlementDate {
    /// No `:32A:` field was read
    #[default]
    Absent,
    /// `:32A:` was read but its digits are not a calendar date
    Invalid {
        /// Full year (century applied)
        year: i32,
        month: u32,
        day: u32,
    },
    /// A real calendar date
    Valid(NaiveDate),
}

impl SettlementDate {
    /// The date, if one could be derived
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SettlementDate::Valid(date) => Some(*date),
            _ => None,
        }
    }

    /// The derivation failure as an error, if there was one
    pub fn error(&self) -> Option<Mt10xError> {
        match *self {
            SettlementDate::Invalid { year, month, day } => {
                Some(Mt10xError::InvalidDate { year, month, day })
            }
            _ => None,
        }
    }
}

/// Text block (block 4) of an MT10x message
///
/// Every field accessor returns the exact substring of the body with only
/// surrounding whitespace trimmed; no case folding or semantic checks are
/// applied. Fields whose tag is absent return `None`.
///
/// When the body does not follow the tag grammar, `is_valid()` is false and
/// only the fields read before the offending position are set.
///
/// # Repeated tags
///
/// `:13C:` and `:71F:` may repeat. Their typed accessors return the last
/// occurrence; every occurrence is still available through
/// [`fields`](Self::fields) and [`get_all`](Self::get_all).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mt10x_rs::TextBlock;
///
/// let text = TextBlock::parse(":20:REF1 :23B:CRED :32A:210101USD100,00 -}");
/// assert!(text.is_valid());
/// assert_eq!(text.senders_reference(), Some("REF1"));
/// assert_eq!(text.interbank_settled_amount(), Some("100,00"));
/// assert_eq!(text.date(), NaiveDate::from_ymd_opt(2021, 1, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub(crate) raw: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) error: Option<Mt10xError>,

    pub(crate) senders_reference: Option<String>,
    pub(crate) time_indications: Vec<TimeIndication>,
    pub(crate) bank_operation_code: Option<String>,
    pub(crate) instruction_code: Option<String>,
    pub(crate) transaction_type_code: Option<String>,
    pub(crate) interbank_settled_currency: Option<String>,
    pub(crate) interbank_settled_amount: Option<String>,
    pub(crate) original_ordered_currency: Option<String>,
    pub(crate) original_ordered_amount: Option<String>,
    pub(crate) exchange_rate: Option<String>,
    pub(crate) ordering_customer: Option<String>,
    pub(crate) sending_institution: Option<String>,
    pub(crate) ordering_institution: Option<String>,
    pub(crate) sender_correspondent: Option<String>,
    pub(crate) receiver_correspondent: Option<String>,
    pub(crate) intermediary: Option<String>,
    pub(crate) account_with_institution: Option<String>,
    pub(crate) beneficiary: Option<String>,
    pub(crate) remittance_information: Option<String>,
    pub(crate) details_of_charges: Option<String>,
    pub(crate) sender_charges: Option<String>,
    pub(crate) receiver_charges: Option<String>,
    pub(crate) sender_to_receiver_information: Option<String>,
    pub(crate) regulatory_reporting: Option<String>,

    pub(crate) settlement_date: SettlementDate,
}

impl TextBlock {
    /// Original body text as handed to the parser
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the whole body followed the tag grammar
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the body was rejected, if it was
    pub fn error(&self) -> Option<&Mt10xError> {
        self.error.as_ref()
    }

    /// Every field read, in input order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Value of the last field with exactly this tag (e.g. `"50K"`)
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    /// Values of every field with exactly this tag, in input order
    pub fn get_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    /// Sender's reference, `:20:`
    pub fn senders_reference(&self) -> Option<&str> {
        self.senders_reference.as_deref()
    }

    /// Alias for [`senders_reference`](Self::senders_reference)
    pub fn transaction_reference(&self) -> Option<&str> {
        self.senders_reference()
    }

    /// Last `:13C:` time indication
    pub fn time_indication(&self) -> Option<&TimeIndication> {
        self.time_indications.last()
    }

    /// Every `:13C:` time indication, in input order
    pub fn time_indications(&self) -> &[TimeIndication] {
        &self.time_indications
    }

    /// Bank operation code, `:23B:`
    pub fn bank_operation_code(&self) -> Option<&str> {
        self.bank_operation_code.as_deref()
    }

    /// Instruction code, `:23E:`
    pub fn instruction_code(&self) -> Option<&str> {
        self.instruction_code.as_deref()
    }

    /// Transaction type code, `:26T:`
    pub fn transaction_type_code(&self) -> Option<&str> {
        self.transaction_type_code.as_deref()
    }

    /// Settlement currency from `:32A:`
    pub fn interbank_settled_currency(&self) -> Option<&str> {
        self.interbank_settled_currency.as_deref()
    }

    /// Settlement amount from `:32A:`, comma decimal separator kept as-is
    pub fn interbank_settled_amount(&self) -> Option<&str> {
        self.interbank_settled_amount.as_deref()
    }

    /// Instructed currency, `:33B:`
    pub fn original_ordered_currency(&self) -> Option<&str> {
        self.original_ordered_currency.as_deref()
    }

    /// Instructed amount, `:33B:`
    pub fn original_ordered_amount(&self) -> Option<&str> {
        self.original_ordered_amount.as_deref()
    }

    /// Exchange rate, `:36:`
    pub fn exchange_rate(&self) -> Option<&str> {
        self.exchange_rate.as_deref()
    }

    /// Ordering customer, `:50A:`/`:50F:`/`:50K:`
    pub fn ordering_customer(&self) -> Option<&str> {
        self.ordering_customer.as_deref()
    }

    /// Sending institution, `:51A:`
    pub fn sending_institution(&self) -> Option<&str> {
        self.sending_institution.as_deref()
    }

    /// Ordering institution, `:52A:`/`:52D:`
    pub fn ordering_institution(&self) -> Option<&str> {
        self.ordering_institution.as_deref()
    }

    /// Sender's correspondent, `:53A:`/`:53B:`/`:53D:`
    pub fn sender_correspondent(&self) -> Option<&str> {
        self.sender_correspondent.as_deref()
    }

    /// Receiver's correspondent, `:54A:`/`:54B:`/`:54D:`
    pub fn receiver_correspondent(&self) -> Option<&str> {
        self.receiver_correspondent.as_deref()
    }

    /// Intermediary institution, `:56A:`/`:56C:`/`:56D:`
    pub fn intermediary(&self) -> Option<&str> {
        self.intermediary.as_deref()
    }

    /// Account with institution, `:57A:` to `:57D:`
    pub fn account_with_institution(&self) -> Option<&str> {
        self.account_with_institution.as_deref()
    }

    /// Beneficiary customer, `:59:`/`:59A:`
    pub fn beneficiary(&self) -> Option<&str> {
        self.beneficiary.as_deref()
    }

    /// Remittance information, `:70:`
    pub fn remittance_information(&self) -> Option<&str> {
        self.remittance_information.as_deref()
    }

    /// Details of charges (`OUR`, `SHA`, `BEN`), `:71A:`
    pub fn details_of_charges(&self) -> Option<&str> {
        self.details_of_charges.as_deref()
    }

    /// Last sender's charges entry, `:71F:`
    pub fn sender_charges(&self) -> Option<&str> {
        self.sender_charges.as_deref()
    }

    /// Receiver's charges, `:71G:`
    pub fn receiver_charges(&self) -> Option<&str> {
        self.receiver_charges.as_deref()
    }

    /// Sender to receiver information, `:72:`
    pub fn sender_to_receiver_information(&self) -> Option<&str> {
        self.sender_to_receiver_information.as_deref()
    }

    /// Regulatory reporting, `:77B:`
    pub fn regulatory_reporting(&self) -> Option<&str> {
        self.regulatory_reporting.as_deref()
    }

    /// Settlement date derivation outcome
    pub fn settlement_date(&self) -> &SettlementDate {
        &self.settlement_date
    }

    /// Settlement date, if `:32A:` was read and its digits form a real date
    pub fn date(&self) -> Option<NaiveDate> {
        self.settlement_date.date()
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
