//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every use is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit per-endpoint request URLs and whole-cycle durations.
    pub print_fetch_timings: bool,
    /// Emit payload sizes (number of price/close entries) after decoding.
    pub print_payload_sizes: bool,
    /// Emit UI interaction logs (fetch clicks, profile switches).
    pub print_ui_interactions: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_timings: false,
    print_payload_sizes: false,
    print_ui_interactions: true,
    print_shutdown: false,
};
