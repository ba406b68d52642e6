use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value transfer waiting in the pending pool or sealed inside a block.
/// Sender and recipient are opaque identifiers; nothing here checks ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// Canonical form used inside the block digest preimage:
    /// keys sorted (`amount`, `recipient`, `sender`), no whitespace.
    pub fn canonical_json(&self) -> String {
        format!(
            "{{\"amount\":{},\"recipient\":{},\"sender\":{}}}",
            self.amount,
            Value::from(self.recipient.as_str()),
            Value::from(self.sender.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn canonical_json_sorts_keys() {
        let tx = Transaction::new("a", "b", 5);
        assert_eq!(
            tx.canonical_json(),
            r#"{"amount":5,"recipient":"b","sender":"a"}"#
        );
    }

    #[test]
    fn canonical_json_escapes_strings() {
        let tx = Transaction::new("quote\"d", "line\nbreak", 0);
        assert_eq!(
            tx.canonical_json(),
            r#"{"amount":0,"recipient":"line\nbreak","sender":"quote\"d"}"#
        );
    }

    #[test]
    fn negative_amount_is_rejected_on_decode() {
        let res = serde_json::from_str::<Transaction>(
            r#"{"sender":"a","recipient":"b","amount":-5}"#,
        );
        assert!(res.is_err());
    }
}
