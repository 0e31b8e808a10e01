//! Text block parsing
//!
//! Runs the tokenizer over a body and copies each token into its typed
//! slot, then derives the settlement date.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::ParseConfig;
use crate::error::Mt10xError;

use super::catalog::FieldKind;
use super::tokenizer::{self, Token, Value};
use super::types::{Field, SettlementDate, TextBlock, TimeIndication};

/// Closing sentinel of block 4
const SENTINEL: &str = "-}";

/// Strip surrounding whitespace and a trailing `-}` sentinel
fn body_payload(raw: &str) -> &str {
    let body = raw.trim();
    match body.strip_suffix(SENTINEL) {
        Some(stripped) => stripped.trim_end(),
        None => body,
    }
}

/// Build a calendar date from the `YY`, `MM`, `DD` digit groups of `:32A:`
pub(crate) fn derive_settlement_date(
    century: i32,
    year: &str,
    month: &str,
    day: &str,
) -> SettlementDate {
    // The tokenizer only hands over two ASCII digits per group
    let (Ok(yy), Ok(month), Ok(day)) = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
    else {
        return SettlementDate::Absent;
    };
    let Some(year) = century.checked_add(yy) else {
        debug!(century, yy, "Settlement year out of range");
        return SettlementDate::Absent;
    };

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => SettlementDate::Valid(date),
        None => {
            debug!(year, month, day, "Settlement digits are not a calendar date");
            SettlementDate::Invalid { year, month, day }
        }
    }
}

impl TextBlock {
    /// Parse a block 4 body with default settings
    ///
    /// Never fails: grammar violations are reported through
    /// [`is_valid`](Self::is_valid) and [`error`](Self::error).
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, &ParseConfig::default())
    }

    /// Parse a block 4 body
    ///
    /// Surrounding whitespace and a trailing `-}` are ignored. An empty body
    /// yields an invalid block with no fields.
    pub fn parse_with(raw: &str, config: &ParseConfig) -> Self {
        let mut text = TextBlock {
            raw: raw.to_string(),
            ..Default::default()
        };

        let body = body_payload(raw);
        if body.is_empty() {
            text.error = Some(Mt10xError::EmptyInput);
            return text;
        }

        let tokenized = tokenizer::tokenize(body);
        for token in &tokenized.tokens {
            text.apply(token, config);
        }

        if let Some(e) = tokenized.error {
            debug!(fields = text.fields.len(), "Text block rejected: {}", e);
            text.error = Some(e);
        }

        text
    }

    fn apply(&mut self, token: &Token<'_>, config: &ParseConfig) {
        self.fields.push(Field {
            tag: token.tag.to_string(),
            value: token.raw_value.to_string(),
        });

        match token.value {
            Value::Text(value) => {
                let slot = match token.kind {
                    FieldKind::SendersReference => &mut self.senders_reference,
                    FieldKind::BankOperationCode => &mut self.bank_operation_code,
                    FieldKind::InstructionCode => &mut self.instruction_code,
                    FieldKind::TransactionTypeCode => &mut self.transaction_type_code,
                    FieldKind::ExchangeRate => &mut self.exchange_rate,
                    FieldKind::OrderingCustomer => &mut self.ordering_customer,
                    FieldKind::SendingInstitution => &mut self.sending_institution,
                    FieldKind::OrderingInstitution => &mut self.ordering_institution,
                    FieldKind::SenderCorrespondent => &mut self.sender_correspondent,
                    FieldKind::ReceiverCorrespondent => &mut self.receiver_correspondent,
                    FieldKind::Intermediary => &mut self.intermediary,
                    FieldKind::AccountWithInstitution => &mut self.account_with_institution,
                    FieldKind::Beneficiary => &mut self.beneficiary,
                    FieldKind::RemittanceInformation => &mut self.remittance_information,
                    FieldKind::DetailsOfCharges => &mut self.details_of_charges,
                    FieldKind::SenderCharges => &mut self.sender_charges,
                    FieldKind::ReceiverCharges => &mut self.receiver_charges,
                    FieldKind::SenderToReceiverInformation => {
                        &mut self.sender_to_receiver_information
                    }
                    FieldKind::RegulatoryReporting => &mut self.regulatory_reporting,
                    // Structured kinds never carry a plain text value
                    FieldKind::TimeIndication
                    | FieldKind::Settlement
                    | FieldKind::OriginalOrdered => return,
                };
                *slot = Some(value.to_string());
            }
            Value::TimeIndication {
                class,
                time,
                sign,
                offset,
            } => {
                self.time_indications.push(TimeIndication {
                    class: class.to_string(),
                    time: time.to_string(),
                    sign,
                    offset: offset.to_string(),
                });
            }
            Value::Settlement {
                year,
                month,
                day,
                currency,
                amount,
            } => {
                self.interbank_settled_currency = Some(currency.to_string());
                self.interbank_settled_amount = Some(amount.to_string());
                self.settlement_date = derive_settlement_date(config.century, year, month, day);
            }
            Value::CurrencyAmount { currency, amount } => {
                self.original_ordered_currency = Some(currency.to_string());
                self.original_ordered_amount = Some(amount.to_string());
            }
        }
    }
}
