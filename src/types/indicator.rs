use serde::{Deserialize, Serialize};

/// Precomputed indicator values for one symbol at one point in time.
///
/// Every field is optional: not every symbol/date has every indicator
/// computed yet. Non-finite values are treated the same as missing ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub rsi_14: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub macd_signal: Option<f64>,
    #[serde(default)]
    pub sma_50: Option<f64>,
    #[serde(default)]
    pub sma_200: Option<f64>,
    #[serde(default)]
    pub bb_upper: Option<f64>,
    #[serde(default)]
    pub bb_middle: Option<f64>,
    #[serde(default)]
    pub bb_lower: Option<f64>,
    #[serde(default)]
    pub mfi_14: Option<f64>,
}

/// Filter out missing and non-finite values.
#[inline]
pub fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl IndicatorRow {
    pub fn close(&self) -> Option<f64> {
        known(self.close)
    }

    pub fn rsi_14(&self) -> Option<f64> {
        known(self.rsi_14)
    }

    pub fn macd(&self) -> Option<f64> {
        known(self.macd)
    }

    pub fn macd_signal(&self) -> Option<f64> {
        known(self.macd_signal)
    }

    pub fn sma_50(&self) -> Option<f64> {
        known(self.sma_50)
    }

    pub fn sma_200(&self) -> Option<f64> {
        known(self.sma_200)
    }

    pub fn bb_upper(&self) -> Option<f64> {
        known(self.bb_upper)
    }

    pub fn bb_middle(&self) -> Option<f64> {
        known(self.bb_middle)
    }

    pub fn bb_lower(&self) -> Option<f64> {
        known(self.bb_lower)
    }

    pub fn mfi_14(&self) -> Option<f64> {
        known(self.mfi_14)
    }

    pub fn with_close(mut self, close: f64) -> Self {
        self.close = Some(close);
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi_14 = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: f64, signal: f64) -> Self {
        self.macd = Some(macd);
        self.macd_signal = Some(signal);
        self
    }

    pub fn with_moving_averages(mut self, sma_50: f64, sma_200: f64) -> Self {
        self.sma_50 = Some(sma_50);
        self.sma_200 = Some(sma_200);
        self
    }

    pub fn with_sma_200(mut self, sma_200: f64) -> Self {
        self.sma_200 = Some(sma_200);
        self
    }

    pub fn with_bollinger(mut self, upper: f64, middle: f64, lower: f64) -> Self {
        self.bb_upper = Some(upper);
        self.bb_middle = Some(middle);
        self.bb_lower = Some(lower);
        self
    }

    pub fn with_mfi(mut self, mfi: f64) -> Self {
        self.mfi_14 = Some(mfi);
        self
    }
}

/// One symbol's current row plus, optionally, the row one period earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSnapshot {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub current: IndicatorRow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<IndicatorRow>,
}

impl SymbolSnapshot {
    pub fn new(symbol: impl Into<String>, current: IndicatorRow) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            current,
            previous: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_previous(mut self, previous: IndicatorRow) -> Self {
        self.previous = Some(previous);
        self
    }
}
