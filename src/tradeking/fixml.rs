//! FIXML order message construction
//!
//! TradeKing accepts orders as FIXML documents. Downstream validation is
//! structural, so serialization must be byte-exact: fixed namespace, fixed
//! element nesting, and a stable attribute order on every element.

use serde::{Deserialize, Serialize};

/// The XML namespace for FIXML requests
pub const FIXML_NAMESPACE: &str = "http://www.fixprotocol.org/FIXML-5-0-SP2";

/// The content type header value for FIXML requests
pub const FIXML_CONTENT_TYPE: &str = "text/xml";

/// The four order shapes the trader submits.
///
/// All four are market orders on common stock; they differ only in side,
/// time-in-force, and whether the leg closes a short position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderIntent {
    /// Day order, buy at market — opening leg of the bull strategy
    BuyNow,
    /// Market-on-close order, sell at market — closing leg of the bull strategy
    SellAtClose,
    /// Day order, sell short at market — opening leg of the bear strategy
    ShortNow,
    /// Market-on-close order, buy to cover at market — closing leg of the
    /// bear strategy
    CoverAtClose,
}

impl OrderIntent {
    /// FIX TmInForce code: "0" = day, "7" = market on close
    fn time_in_force(self) -> &'static str {
        match self {
            OrderIntent::BuyNow | OrderIntent::ShortNow => "0",
            OrderIntent::SellAtClose | OrderIntent::CoverAtClose => "7",
        }
    }

    /// FIX Side code: "1" = buy, "2" = sell, "5" = sell short
    fn side(self) -> &'static str {
        match self {
            OrderIntent::BuyNow | OrderIntent::CoverAtClose => "1",
            OrderIntent::SellAtClose => "2",
            OrderIntent::ShortNow => "5",
        }
    }

    /// FIX AcctTyp code, only set on the buy-to-cover leg ("5" = cover)
    fn account_type(self) -> Option<&'static str> {
        match self {
            OrderIntent::CoverAtClose => Some("5"),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderIntent::BuyNow => write!(f, "buy now"),
            OrderIntent::SellAtClose => write!(f, "sell at close"),
            OrderIntent::ShortNow => write!(f, "short now"),
            OrderIntent::CoverAtClose => write!(f, "cover at close"),
        }
    }
}

/// A normalized order descriptor for one leg of a strategy.
///
/// Built by the orchestrator, serialized to FIXML, and consumed immediately
/// by the broker client; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub intent: OrderIntent,
    pub ticker: String,
    pub quantity: u64,
}

impl Order {
    pub fn new(intent: OrderIntent, ticker: impl Into<String>, quantity: u64) -> Self {
        Self {
            intent,
            ticker: ticker.into(),
            quantity,
        }
    }

    /// Serialize to the FIXML wire format.
    ///
    /// Attribute order is fixed (TmInForce, Typ, Side, AcctTyp, Acct) and the
    /// output is deterministic for a given order and account.
    pub fn to_fixml(&self, account: &str) -> String {
        let mut xml = String::with_capacity(192);
        xml.push_str(&format!("<FIXML xmlns=\"{}\">", FIXML_NAMESPACE));
        xml.push_str(&format!(
            "<Order TmInForce=\"{}\" Typ=\"1\" Side=\"{}\"",
            self.intent.time_in_force(),
            self.intent.side()
        ));
        if let Some(account_type) = self.intent.account_type() {
            xml.push_str(&format!(" AcctTyp=\"{}\"", account_type));
        }
        xml.push_str(&format!(" Acct=\"{}\">", account));
        xml.push_str(&format!(
            "<Instrmt SecTyp=\"CS\" Sym=\"{}\"/>",
            self.ticker
        ));
        xml.push_str(&format!("<OrdQty Qty=\"{}\"/>", self.quantity));
        xml.push_str("</Order></FIXML>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ACCOUNT: &str = "12345678";

    #[test]
    fn buy_now_fixml_is_byte_exact() {
        let order = Order::new(OrderIntent::BuyNow, "GM", 23);
        assert_eq!(
            order.to_fixml(ACCOUNT),
            "<FIXML xmlns=\"http://www.fixprotocol.org/FIXML-5-0-SP2\">\
             <Order TmInForce=\"0\" Typ=\"1\" Side=\"1\" Acct=\"12345678\">\
             <Instrmt SecTyp=\"CS\" Sym=\"GM\"/>\
             <OrdQty Qty=\"23\"/>\
             </Order>\
             </FIXML>"
        );
    }

    #[test]
    fn sell_at_close_fixml_is_byte_exact() {
        let order = Order::new(OrderIntent::SellAtClose, "GM", 23);
        assert_eq!(
            order.to_fixml(ACCOUNT),
            "<FIXML xmlns=\"http://www.fixprotocol.org/FIXML-5-0-SP2\">\
             <Order TmInForce=\"7\" Typ=\"1\" Side=\"2\" Acct=\"12345678\">\
             <Instrmt SecTyp=\"CS\" Sym=\"GM\"/>\
             <OrdQty Qty=\"23\"/>\
             </Order>\
             </FIXML>"
        );
    }

    #[test]
    fn short_now_fixml_is_byte_exact() {
        let order = Order::new(OrderIntent::ShortNow, "GM", 23);
        assert_eq!(
            order.to_fixml(ACCOUNT),
            "<FIXML xmlns=\"http://www.fixprotocol.org/FIXML-5-0-SP2\">\
             <Order TmInForce=\"0\" Typ=\"1\" Side=\"5\" Acct=\"12345678\">\
             <Instrmt SecTyp=\"CS\" Sym=\"GM\"/>\
             <OrdQty Qty=\"23\"/>\
             </Order>\
             </FIXML>"
        );
    }

    #[test]
    fn cover_at_close_fixml_is_byte_exact() {
        let order = Order::new(OrderIntent::CoverAtClose, "GM", 23);
        assert_eq!(
            order.to_fixml(ACCOUNT),
            "<FIXML xmlns=\"http://www.fixprotocol.org/FIXML-5-0-SP2\">\
             <Order TmInForce=\"7\" Typ=\"1\" Side=\"1\" AcctTyp=\"5\" Acct=\"12345678\">\
             <Instrmt SecTyp=\"CS\" Sym=\"GM\"/>\
             <OrdQty Qty=\"23\"/>\
             </Order>\
             </FIXML>"
        );
    }

    #[test]
    fn serialization_is_idempotent() {
        let order = Order::new(OrderIntent::CoverAtClose, "LMT", 7);
        assert_eq!(order.to_fixml(ACCOUNT), order.to_fixml(ACCOUNT));
    }
}
