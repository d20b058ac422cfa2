//! User-facing message language.

use candela_advice::Advice;
use candela_types::{Symbol, Timeframe};

use crate::FormatError;

/// Language of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Locale {
    /// Returns the locale code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Returns all locales.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::En, Self::Ar]
    }

    /// Header line of an indicator report.
    #[must_use]
    pub fn analysis_header(&self, symbol: &Symbol, timeframe: Timeframe) -> String {
        match self {
            Self::En => format!("Analysis of {symbol} on {timeframe}:"),
            Self::Ar => format!("تحليل {symbol} على فريم {timeframe}:"),
        }
    }

    /// Header line of a DCA summary.
    #[must_use]
    pub fn dca_header(&self, symbol: &Symbol) -> String {
        match self {
            Self::En => format!("DCA analysis for {symbol}:"),
            Self::Ar => format!("تحليل DCA لـ {symbol}:"),
        }
    }

    /// Average price line of a DCA summary.
    #[must_use]
    pub fn dca_average(&self, price: f64, quote: &str) -> String {
        match self {
            Self::En => format!("Average price: {price:.2} {quote}"),
            Self::Ar => format!("السعر المتوسط: {price:.2} {quote}"),
        }
    }

    /// Coin total line of a DCA summary.
    #[must_use]
    pub fn dca_total(&self, coins: f64, investment: f64, quote: &str) -> String {
        match self {
            Self::En => format!("Total coins: {coins:.6} for {investment} {quote}"),
            Self::Ar => format!("إجمالي العملات: {coins:.6} مقابل {investment} {quote}"),
        }
    }

    /// Header line of investment advice.
    #[must_use]
    pub fn advice_header(&self, symbol: &Symbol) -> String {
        match self {
            Self::En => format!("Smart investment advice for {symbol}:"),
            Self::Ar => format!("نصيحة الاستثمار الذكي لـ {symbol}:"),
        }
    }

    /// Sentence describing `advice`.
    #[must_use]
    pub const fn advice(&self, advice: Advice) -> &'static str {
        match (self, advice) {
            (Self::En, Advice::StrongBuy) => "Buy now (strong buying opportunity)",
            (Self::En, Advice::Sell) => "Wait or sell (market is overbought)",
            (Self::En, Advice::Wait) => "Wait (market is unclear)",
            (Self::Ar, Advice::StrongBuy) => "اشترِ الآن (فرصة شراء قوية)",
            (Self::Ar, Advice::Sell) => "انتظر أو بيع (السوق مرتفع)",
            (Self::Ar, Advice::Wait) => "انتظر (السوق غير واضح)",
        }
    }

    /// Prefix of a failure message.
    #[must_use]
    pub const fn error_prefix(&self) -> &'static str {
        match self {
            Self::En => "Error: ",
            Self::Ar => "خطأ: ",
        }
    }

    /// Greeting shown above the interactive service menu.
    #[must_use]
    pub const fn menu_prompt(&self) -> &'static str {
        match self {
            Self::En => "Welcome! Choose a service:",
            Self::Ar => "مرحبًا! اختر خدمة:",
        }
    }

    /// Labels of the interactive services: technical, DCA, smart.
    #[must_use]
    pub const fn menu_services(&self) -> [&'static str; 3] {
        match self {
            Self::En => ["Technical analysis", "Investment analysis (DCA)", "Smart investing"],
            Self::Ar => ["تحليل فني", "تحليل استثماري (DCA)", "استثمار ذكي"],
        }
    }

    /// Prompt of the interactive timeframe selection.
    #[must_use]
    pub const fn timeframe_prompt(&self) -> &'static str {
        match self {
            Self::En => "Choose a timeframe:",
            Self::Ar => "اختر الفريم الزمني:",
        }
    }

    /// Human label of a timeframe.
    #[must_use]
    pub const fn timeframe_label(&self, timeframe: Timeframe) -> &'static str {
        match (self, timeframe) {
            (Self::En, Timeframe::Minute15) => "15 minutes",
            (Self::En, Timeframe::Hour1) => "1 hour",
            (Self::En, Timeframe::Hour4) => "4 hours",
            (Self::En, Timeframe::Day1) => "Daily",
            (Self::Ar, Timeframe::Minute15) => "15 دقيقة",
            (Self::Ar, Timeframe::Hour1) => "1 ساعة",
            (Self::Ar, Timeframe::Hour4) => "4 ساعات",
            (Self::Ar, Timeframe::Day1) => "يومي",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            _ => Err(FormatError::UnknownLocale(s.to_string())),
        }
    }
}
