//! Signal and form defaults

use crate::analysis::divergence::DivergenceProfile;
use crate::domain::MarketInterval;

/// Initial values of the parameter form
pub struct FormDefaults {
    pub realm_id: u32,
    pub resource_id: u32,
    pub quality: u32,
    pub interval: MarketInterval,
    pub show_vwap: bool,
    pub show_sma: bool,
}

/// The Master Signal Configuration
pub struct SignalConfig {
    // Threshold profile used until the user picks another one
    pub default_profile: DivergenceProfile,
    pub default_sma_window: usize,
    pub form: FormDefaults,
}

pub const SIGNALS: SignalConfig = SignalConfig {
    default_profile: DivergenceProfile::Tight,
    default_sma_window: 5,

    form: FormDefaults {
        realm_id: 0,
        resource_id: 1,
        quality: 1,
        interval: MarketInterval::OneMinute,
        show_vwap: true,
        show_sma: false,
    },
};
